//! Test utilities and mocks for scormgen unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use scormgen::test_support::MockFileSystem;
//!
//! #[test]
//! fn test_example() {
//!     let mut fs = MockFileSystem::new();
//!     fs.add_file("src/index.html");
//!
//!     // Pass `&fs` wherever a `&dyn FileSystem` is expected...
//! }
//! ```

pub mod fixtures;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

use crate::util::fs::{FileSystem, GLOB_OPTIONS};

pub use fixtures::*;

/// In-memory file tree implementing [`FileSystem`].
///
/// Paths are kept sorted so glob results come back in a stable order, the
/// same way the real glob walk returns them.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
}

impl MockFileSystem {
    /// Create a new empty mock filesystem.
    pub fn new() -> Self {
        MockFileSystem::default()
    }

    /// Create a filesystem containing `paths`.
    pub fn with_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut fs = MockFileSystem::new();
        for path in paths {
            fs.add_file(path);
        }
        fs
    }

    /// Add a file, registering its parent directories.
    pub fn add_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let mut current = path.parent();
        while let Some(parent) = current {
            if parent.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(parent.to_path_buf());
            current = parent.parent();
        }
        self.files.insert(path);
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path) || self.dirs.contains(path)
    }

    fn expand_glob(&self, base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let pattern =
            Pattern::new(pattern).with_context(|| format!("invalid glob pattern: {}", pattern))?;

        Ok(self
            .files
            .iter()
            .filter_map(|file| file.strip_prefix(base).ok())
            .filter(|rel| pattern.matches_path_with(rel, GLOB_OPTIONS))
            .map(Path::to_path_buf)
            .collect())
    }
}

/// Assertion helpers for manifest output.
pub mod assertions {
    /// Assert that `xml` contains `needle`, printing the document on failure.
    pub fn assert_xml_contains(xml: &str, needle: &str) {
        assert!(
            xml.contains(needle),
            "expected manifest to contain `{}`, got:\n{}",
            needle,
            xml
        );
    }

    /// Assert that `xml` does not contain `needle`.
    pub fn assert_xml_lacks(xml: &str, needle: &str) {
        assert!(
            !xml.contains(needle),
            "expected manifest not to contain `{}`, got:\n{}",
            needle,
            xml
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_filesystem_basic() {
        let mut fs = MockFileSystem::new();
        fs.add_file("src/index.html");

        assert!(fs.exists(Path::new("src/index.html")));
        assert!(fs.exists(Path::new("src")));
        assert!(!fs.exists(Path::new("src/missing.html")));
    }

    #[test]
    fn test_mock_glob_matches_relative_paths() {
        let fs = MockFileSystem::with_files([
            "src/a.html",
            "src/b.html",
            "src/css/site.css",
            "src/.hidden",
            "other/c.html",
        ]);

        let html = fs.expand_glob(Path::new("src"), "*.html").unwrap();
        assert_eq!(html, vec![PathBuf::from("a.html"), PathBuf::from("b.html")]);

        let all = fs.expand_glob(Path::new("src"), "**/*").unwrap();
        assert_eq!(
            all,
            vec![
                PathBuf::from("a.html"),
                PathBuf::from("b.html"),
                PathBuf::from("css/site.css"),
            ]
        );
    }

    #[test]
    fn test_mock_glob_invalid_pattern() {
        let fs = MockFileSystem::new();
        assert!(fs.expand_glob(Path::new("src"), "[").is_err());
    }
}
