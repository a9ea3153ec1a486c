//! Implementation of `scormgen init`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::course::generate_default_course;
use crate::core::{ScormVersion, COURSE_FILE_ALIAS, COURSE_FILE_NAME};

/// Options for creating a course file.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Course identifier
    pub course_id: String,

    /// SCORM version tag
    pub version: String,
}

/// Write a starter `Scorm.toml` into `path`.
pub fn init_course(path: &Path, opts: &InitOptions) -> Result<PathBuf> {
    if !ScormVersion::is_known_tag(&opts.version) {
        bail!(
            "unknown SCORM version `{}`\n\
             help: Use one of `1.2`, `2004` or `2004v3`",
            opts.version
        );
    }

    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }

    for name in [COURSE_FILE_NAME, COURSE_FILE_ALIAS] {
        if path.join(name).exists() {
            bail!("`{}` already exists in `{}`", name, path.display());
        }
    }

    let course_path = path.join(COURSE_FILE_NAME);
    fs::write(
        &course_path,
        generate_default_course(&opts.course_id, &opts.version),
    )
    .with_context(|| format!("failed to write {}", COURSE_FILE_NAME))?;

    Ok(course_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn opts(version: &str) -> InitOptions {
        InitOptions {
            course_id: "demo".to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_init_writes_course_file() {
        let tmp = TempDir::new().unwrap();
        let path = init_course(tmp.path(), &opts("2004")).unwrap();

        assert_eq!(path, tmp.path().join(COURSE_FILE_NAME));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("course-id = \"demo\""));
        assert!(content.contains("[[sco]]"));
    }

    #[test]
    fn test_init_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("course");
        init_course(&dir, &opts("1.2")).unwrap();
        assert!(dir.join(COURSE_FILE_NAME).exists());
    }

    #[test]
    fn test_init_fails_if_course_exists() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(COURSE_FILE_ALIAS), "{}").unwrap();

        let err = init_course(tmp.path(), &opts("2004")).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_init_rejects_unknown_version() {
        let tmp = TempDir::new().unwrap();
        let err = init_course(tmp.path(), &opts("3.0")).unwrap_err();
        assert!(err.to_string().contains("unknown SCORM version"));
        assert!(!tmp.path().join(COURSE_FILE_NAME).exists());
    }

    #[test]
    fn test_rejected_version_leaves_no_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("newdir");
        assert!(init_course(&dir, &opts("3.0")).is_err());
        assert!(!dir.exists());
    }
}
