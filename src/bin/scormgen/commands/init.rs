//! `scormgen init` command

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::InitArgs;
use scormgen::ops::scormgen_init::{init_course, InitOptions};

/// Determines the course id from the arguments or directory.
pub fn determine_course_id(course_id: &Option<String>, path: &Path) -> String {
    course_id.clone().unwrap_or_else(|| {
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("CourseID")
            .to_string()
    })
}

pub fn execute(args: InitArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from("."));
    let course_id = determine_course_id(&args.course_id, &path);

    let opts = InitOptions {
        course_id: course_id.clone(),
        version: args.scorm_version,
    };

    let course_path = init_course(&path, &opts)?;
    eprintln!(
        "     Initialized course `{}` in {}",
        course_id,
        course_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_course_id() {
        let id = determine_course_id(&Some("C1".to_string()), Path::new("."));
        assert_eq!(id, "C1");
    }

    #[test]
    fn test_course_id_from_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("safety-101");
        std::fs::create_dir(&dir).unwrap();

        assert_eq!(determine_course_id(&None, &dir), "safety-101");
    }

    #[test]
    fn test_course_id_for_new_directory() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("not-there");
        assert_eq!(determine_course_id(&None, &missing), "not-there");
    }
}
