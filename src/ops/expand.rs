//! File-set expansion.
//!
//! Turns a [`FileGroupSpec`] into the hrefs that end up in a resource's
//! `<file>` list. This is a best-effort filter: missing files and the
//! manifest itself are dropped with a warning, never an error.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::FileGroupSpec;
use crate::ops::MANIFEST_FILE_NAME;
use crate::util::fs::{to_href, FileSystem};

/// An existing, non-manifest file accepted into a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Path relative to the group's `cwd`
    pub path: PathBuf,

    /// `course_sub_dir` followed by the forward-slash relative path
    pub href: String,
}

/// Expand one file group.
///
/// Output order is pattern order, then glob order. Duplicates reachable
/// through several patterns are kept.
pub fn expand_file_group(
    fs: &dyn FileSystem,
    group: &FileGroupSpec,
    course_sub_dir: &str,
) -> Result<Vec<ResolvedFile>> {
    if group.expand {
        tracing::info!("Multiple files specified.");
    }

    let mut files = Vec::new();

    for pattern in &group.src {
        let candidates = if group.expand {
            fs.expand_glob(&group.cwd, pattern)?
        } else {
            vec![PathBuf::from(pattern)]
        };

        for candidate in candidates {
            let full = group.cwd.join(&candidate);

            if !fs.exists(&full) {
                tracing::warn!("Source file \"{}\" not found.", full.display());
            } else if is_manifest(&candidate) {
                tracing::warn!("{} included in file list.", MANIFEST_FILE_NAME);
            } else {
                tracing::debug!("adding {}", full.display());
                files.push(ResolvedFile {
                    href: format!("{}{}", course_sub_dir, to_href(&candidate)),
                    path: candidate,
                });
            }
        }
    }

    Ok(files)
}

/// Expand several groups into one flat list.
pub fn expand_file_groups(
    fs: &dyn FileSystem,
    groups: &[FileGroupSpec],
    course_sub_dir: &str,
) -> Result<Vec<ResolvedFile>> {
    let mut files = Vec::new();
    for group in groups {
        files.extend(expand_file_group(fs, group, course_sub_dir)?);
    }
    Ok(files)
}

fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .map(|name| name == MANIFEST_FILE_NAME)
        .unwrap_or(false)
}
