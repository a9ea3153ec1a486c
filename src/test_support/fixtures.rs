//! Course fixtures for common test scenarios.

use std::path::Path;

use crate::core::{CourseConfig, CourseOverrides};

/// Parse a `Scorm.toml` body as if it lived in the current directory.
pub fn course_from_toml(content: &str) -> CourseConfig {
    CourseConfig::parse(content, Path::new("Scorm.toml"), &CourseOverrides::default())
        .expect("fixture course should parse")
}

/// One SCO with one literal file.
pub fn single_sco_course() -> &'static str {
    r#"
course-id = "C1"
version = "2004"

[[sco]]
id = "S1"
module-title = "Intro"
launch-page = "s1.html"

[[sco.files]]
cwd = "src"
src = ["s1.html"]
"#
}

/// Three SCOs, a shared resource, a prerequisite and a mastery score.
pub fn course_with_common() -> &'static str {
    r#"
course-id = "C2"
title = "Shared Course"

[common]
id = "common_files"

[[common.files]]
cwd = "shared"
src = ["**/*"]
expand = true

[[sco]]
id = "S1"
module-title = "One"
launch-page = "one.html"
include-common-resources = true

[[sco.files]]
cwd = "src"
src = ["one.html", "imsmanifest.xml", "missing.html"]

[[sco]]
id = "S2"
module-title = "Two"
launch-page = "two.html"
prereq-id = "S1"
mastery-score = 75

[[sco.files]]
cwd = "src"
src = ["two*.html"]
expand = true

[[sco.files]]
cwd = "media"
src = ["*.mp4"]
expand = true

[[sco]]
id = "S3"
module-title = "Three"
include-common-resources = true
"#
}
