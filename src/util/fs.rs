//! Filesystem utilities and the file-discovery seam.
//!
//! Manifest assembly only ever asks two questions of the disk: does a path
//! exist, and which files does a glob pattern match under a directory. Both
//! go through [`FileSystem`] so the builder can run against an in-memory
//! tree in tests.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use glob::{glob_with, MatchOptions, Pattern};

/// Glob semantics for file groups: `*` stays within one path segment and
/// dotfiles must be named explicitly.
pub const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// File-discovery capabilities consumed by the manifest builder.
pub trait FileSystem {
    /// Check whether `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Expand `pattern` under `base`, returning matching files relative to
    /// `base` in a stable order.
    fn expand_glob(&self, base: &Path, pattern: &str) -> Result<Vec<PathBuf>>;
}

/// [`FileSystem`] backed by the real disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn expand_glob(&self, base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let full_pattern = if base.as_os_str().is_empty() {
            pattern.to_string()
        } else {
            format!("{}/{}", Pattern::escape(&base.to_string_lossy()), pattern)
        };

        let mut results = Vec::new();
        for entry in glob_with(&full_pattern, GLOB_OPTIONS)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
        {
            match entry {
                Ok(path) => {
                    if path.is_file() {
                        results.push(strip_base(&path, base));
                    }
                }
                Err(e) => {
                    tracing::warn!("glob error: {}", e);
                }
            }
        }

        Ok(results)
    }
}

/// Remove a file if it exists.
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("failed to remove file: {}", path.display()))?;
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write file: {}", path.display()))
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// Join `rel` onto `base`, dropping `.` components.
pub fn normalize_join(base: &Path, rel: &str) -> PathBuf {
    base.join(unixify_path(rel))
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Render a relative path as a forward-slash href fragment.
pub fn to_href(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Convert Windows separators to forward slashes.
pub fn unixify_path(path: &str) -> String {
    if cfg!(windows) {
        path.replace('\\', "/")
    } else {
        path.to_string()
    }
}

/// Strip `base` from a glob result, ignoring `.` components on either side.
fn strip_base(path: &Path, base: &Path) -> PathBuf {
    let clean = |p: &Path| -> PathBuf {
        p.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    };
    let (path, base) = (clean(path), clean(base));

    match path.strip_prefix(&base) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => relative_path(&base, &path),
    }
}
