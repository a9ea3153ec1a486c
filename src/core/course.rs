//! Course description parsing and defaults.
//!
//! A course is described in `Scorm.toml` (canonical) or a JSON file. The raw
//! form mirrors the file; [`CourseConfig`] is the resolved form with every
//! default applied and the version profile selected, so nothing downstream
//! checks for unset fields again.
//!
//! Keys are kebab-case. The camelCase option names used by Gruntfile-based
//! setups (`courseId`, `SCOtitle`, `launchPage`, ...) are accepted as
//! aliases.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::core::version::VersionProfile;
use crate::util::fs::{normalize_join, unixify_path};

/// Canonical course file name.
pub const COURSE_FILE_NAME: &str = "Scorm.toml";

/// Alternate course file name (JSON).
pub const COURSE_FILE_ALIAS: &str = "scorm.json";

/// Suffix appended to a SCO id to form its resource id.
pub const RESOURCE_SUFFIX: &str = "_resource";

const DEFAULT_SCHEMA_DIR: &str = "";
const DEFAULT_VERSION: &str = "2004";
const DEFAULT_COURSE_ID: &str = "CourseID";
const DEFAULT_TITLE: &str = "SCO Title";
const DEFAULT_MODULE_TITLE: &str = "Module";
const DEFAULT_LAUNCH_PAGE: &str = "index.html";
const DEFAULT_PATH: &str = "./";

/// A resolved course description.
#[derive(Debug, Clone)]
pub struct CourseConfig {
    /// Manifest and organization identifier root
    pub course_id: String,

    /// Version tag as written by the user
    pub version: String,

    /// Profile selected from `version`
    pub profile: VersionProfile,

    /// Prefix for SCORM 2004 schema locations
    pub schema_dir: String,

    /// Organization title
    pub title: String,

    /// Default SCO title
    pub module_title: String,

    /// Default SCO launch page
    pub launch_page: String,

    /// Directory the manifest is written into
    pub output_dir: PathBuf,

    /// Prefix applied to every href in the manifest
    pub course_sub_dir: String,

    /// Resource shared by SCOs
    pub common: Option<CommonResourceSpec>,

    /// SCOs in declaration order
    pub scos: Vec<ScoSpec>,
}

/// One launchable SCO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoSpec {
    pub id: String,
    pub module_title: String,
    pub launch_page: String,
    pub prereq_id: Option<String>,
    pub mastery_score: Option<u8>,
    pub include_common_resources: bool,
    pub files: Vec<FileGroupSpec>,
}

impl ScoSpec {
    /// Id of the resource backing this SCO.
    pub fn resource_id(&self) -> String {
        format!("{}{}", self.id, RESOURCE_SUFFIX)
    }
}

/// Asset bundle shared by several SCOs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonResourceSpec {
    pub id: String,
    pub files: Vec<FileGroupSpec>,
}

/// A group of source files rooted at `cwd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroupSpec {
    /// Directory the patterns are relative to
    pub cwd: PathBuf,

    /// Glob patterns (when `expand`) or literal relative paths
    pub src: Vec<String>,

    /// Treat `src` as glob patterns
    pub expand: bool,
}

/// Values that take precedence over the course file.
#[derive(Debug, Clone, Default)]
pub struct CourseOverrides {
    pub version: Option<String>,
    pub schema_dir: Option<String>,
    /// Used verbatim, not relative to the course file
    pub output_dir: Option<PathBuf>,
}

/// Raw course file as deserialized.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawCourseConfig {
    #[serde(default, alias = "courseId")]
    course_id: Option<String>,

    #[serde(default)]
    version: Option<String>,

    #[serde(default, alias = "schemaDir")]
    schema_dir: Option<String>,

    #[serde(default, alias = "SCOtitle")]
    title: Option<String>,

    #[serde(default, alias = "moduleTitle")]
    module_title: Option<String>,

    #[serde(default, alias = "launchPage")]
    launch_page: Option<String>,

    #[serde(default)]
    path: Option<String>,

    #[serde(default, alias = "courseSubDir")]
    course_sub_dir: Option<String>,

    #[serde(default)]
    common: Option<RawCommon>,

    #[serde(default, rename = "sco", alias = "scos")]
    scos: Vec<RawSco>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawCommon {
    id: String,

    #[serde(default)]
    files: Vec<RawFileGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawSco {
    id: String,

    #[serde(default, alias = "moduleTitle")]
    module_title: Option<String>,

    #[serde(default, alias = "launchPage")]
    launch_page: Option<String>,

    #[serde(default, alias = "prereqId")]
    prereq_id: Option<String>,

    #[serde(default, alias = "masteryScore")]
    mastery_score: Option<u32>,

    #[serde(default, alias = "includeCommonResources")]
    include_common_resources: bool,

    #[serde(default)]
    files: Vec<RawFileGroup>,
}

#[derive(Debug, Deserialize)]
struct RawFileGroup {
    #[serde(default)]
    cwd: Option<String>,

    #[serde(default)]
    src: Vec<String>,

    #[serde(default)]
    expand: bool,
}

impl CourseConfig {
    /// Load a course file, choosing the format from its extension.
    pub fn load(path: &Path, overrides: &CourseOverrides) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read course file: {}", path.display()))?;

        Self::parse(&content, path, overrides)
    }

    /// Parse course file content. `path` decides the format and the base
    /// directory for relative paths.
    pub fn parse(content: &str, path: &Path, overrides: &CourseOverrides) -> Result<Self> {
        let raw: RawCourseConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(content)
                .with_context(|| format!("failed to parse {}", path.display()))?,
            Some("json") => serde_json::from_str(content)
                .with_context(|| format!("failed to parse {}", path.display()))?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                }
                .into())
            }
        };

        let base_dir = path.parent().unwrap_or(Path::new("")).to_path_buf();

        Ok(Self::resolve(raw, &base_dir, overrides)?)
    }

    /// Apply defaults and overrides, select the version profile and check
    /// that the resources can be wired consistently.
    fn resolve(
        raw: RawCourseConfig,
        base_dir: &Path,
        overrides: &CourseOverrides,
    ) -> Result<Self, ConfigError> {
        let course_id = raw
            .course_id
            .unwrap_or_else(|| DEFAULT_COURSE_ID.to_string());
        if course_id.trim().is_empty() {
            return Err(ConfigError::EmptyCourseId);
        }

        let version = overrides
            .version
            .clone()
            .or(raw.version)
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let schema_dir = overrides
            .schema_dir
            .clone()
            .or(raw.schema_dir)
            .unwrap_or_else(|| DEFAULT_SCHEMA_DIR.to_string());
        let profile = VersionProfile::from_tag(&version, &schema_dir);

        let module_title = raw
            .module_title
            .unwrap_or_else(|| DEFAULT_MODULE_TITLE.to_string());
        let launch_page = raw
            .launch_page
            .unwrap_or_else(|| DEFAULT_LAUNCH_PAGE.to_string());

        let output_dir = match &overrides.output_dir {
            Some(dir) => dir.clone(),
            None => {
                let path = unixify_path(raw.path.as_deref().unwrap_or(DEFAULT_PATH));
                base_dir.join(path)
            }
        };

        let common = raw
            .common
            .map(|c| -> Result<CommonResourceSpec, ConfigError> {
                if c.id.trim().is_empty() {
                    return Err(ConfigError::EmptyCommonId);
                }
                Ok(CommonResourceSpec {
                    id: c.id,
                    files: resolve_file_groups(c.files, base_dir),
                })
            })
            .transpose()?;

        let mut scos = Vec::with_capacity(raw.scos.len());
        for (index, sco) in raw.scos.into_iter().enumerate() {
            if sco.id.trim().is_empty() {
                return Err(ConfigError::EmptyScoId { index });
            }

            let mastery_score = match sco.mastery_score {
                Some(score) if score > 100 => {
                    return Err(ConfigError::MasteryScoreOutOfRange { sco: sco.id, score });
                }
                Some(score) => Some(score as u8),
                None => None,
            };

            if sco.include_common_resources && common.is_none() {
                return Err(ConfigError::MissingCommonResource { sco: sco.id });
            }

            scos.push(ScoSpec {
                module_title: sco.module_title.unwrap_or_else(|| module_title.clone()),
                launch_page: sco.launch_page.unwrap_or_else(|| launch_page.clone()),
                prereq_id: sco.prereq_id.filter(|p| !p.is_empty()),
                mastery_score,
                include_common_resources: sco.include_common_resources,
                files: resolve_file_groups(sco.files, base_dir),
                id: sco.id,
            });
        }

        check_unique_ids(&scos, common.as_ref())?;

        Ok(CourseConfig {
            course_id,
            version,
            profile,
            schema_dir,
            title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            module_title,
            launch_page,
            output_dir,
            course_sub_dir: raw.course_sub_dir.unwrap_or_default(),
            common,
            scos,
        })
    }

    /// Identifier of the single organization.
    pub fn organization_id(&self) -> String {
        format!("{}-org", self.course_id)
    }

    /// Look up a SCO by id.
    pub fn sco(&self, id: &str) -> Option<&ScoSpec> {
        self.scos.iter().find(|s| s.id == id)
    }
}

fn resolve_file_groups(raw: Vec<RawFileGroup>, base_dir: &Path) -> Vec<FileGroupSpec> {
    raw.into_iter()
        .map(|group| FileGroupSpec {
            cwd: match group.cwd {
                Some(cwd) => normalize_join(base_dir, &cwd),
                None => base_dir.to_path_buf(),
            },
            src: group.src,
            expand: group.expand,
        })
        .collect()
}

fn check_unique_ids(
    scos: &[ScoSpec],
    common: Option<&CommonResourceSpec>,
) -> Result<(), ConfigError> {
    let mut sco_ids = HashSet::new();
    // Items and resources share one identifier space in the manifest.
    let mut identifiers = HashSet::new();

    if let Some(common) = common {
        identifiers.insert(common.id.clone());
    }

    for sco in scos {
        if !sco_ids.insert(sco.id.as_str()) {
            return Err(ConfigError::DuplicateScoId { id: sco.id.clone() });
        }
        for id in [sco.id.clone(), sco.resource_id()] {
            if identifiers.contains(&id) {
                return Err(ConfigError::IdentifierCollision { id });
            }
            identifiers.insert(id);
        }
    }

    Ok(())
}

/// Find the course file in `dir`, preferring `Scorm.toml`.
pub fn find_course_file(dir: &Path) -> Option<PathBuf> {
    [COURSE_FILE_NAME, COURSE_FILE_ALIAS]
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

/// Generate a starter `Scorm.toml`.
pub fn generate_default_course(course_id: &str, version: &str) -> String {
    let course_id = toml::Value::String(course_id.to_string());
    let version = toml::Value::String(version.to_string());
    format!(
        r#"course-id = {course_id}
version = {version}
title = {course_id}
path = "./"

[[sco]]
id = "sco_1"
module-title = "Module 1"
launch-page = "index.html"

[[sco.files]]
cwd = "."
src = ["*.html", "assets/**/*"]
expand = true
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::version::ScormVersion;

    fn parse_toml(content: &str) -> Result<CourseConfig> {
        CourseConfig::parse(
            content,
            Path::new("course/Scorm.toml"),
            &CourseOverrides::default(),
        )
    }

    fn config_error(result: Result<CourseConfig>) -> ConfigError {
        result
            .unwrap_err()
            .downcast::<ConfigError>()
            .expect("expected a ConfigError")
    }

    #[test]
    fn test_defaults_applied() {
        let config = parse_toml("").unwrap();

        assert_eq!(config.course_id, "CourseID");
        assert_eq!(config.version, "2004");
        assert_eq!(config.profile.version, ScormVersion::Scorm2004);
        assert_eq!(config.schema_dir, "");
        assert_eq!(config.title, "SCO Title");
        assert_eq!(config.module_title, "Module");
        assert_eq!(config.launch_page, "index.html");
        assert_eq!(config.output_dir, Path::new("course").join("./"));
        assert_eq!(config.course_sub_dir, "");
        assert!(config.common.is_none());
        assert!(config.scos.is_empty());
        assert_eq!(config.organization_id(), "CourseID-org");
    }

    #[test]
    fn test_parse_full_course() {
        let config = parse_toml(
            r#"
course-id = "C1"
version = "1.2"
title = "My Course"
module-title = "Lesson"
course-sub-dir = "content/"

[common]
id = "shared"

[[common.files]]
cwd = "shared"
src = ["**/*.css"]
expand = true

[[sco]]
id = "S1"
launch-page = "s1.html"
include-common-resources = true

[[sco.files]]
cwd = "src"
src = ["s1.html"]

[[sco]]
id = "S2"
module-title = "Second"
prereq-id = "S1"
mastery-score = 80
"#,
        )
        .unwrap();

        assert_eq!(config.course_id, "C1");
        assert_eq!(config.profile.version, ScormVersion::Scorm12);
        assert_eq!(config.course_sub_dir, "content/");

        let common = config.common.as_ref().unwrap();
        assert_eq!(common.id, "shared");
        assert_eq!(common.files[0].cwd, Path::new("course/shared"));
        assert!(common.files[0].expand);

        assert_eq!(config.scos.len(), 2);
        let s1 = config.sco("S1").unwrap();
        assert_eq!(s1.module_title, "Lesson");
        assert_eq!(s1.launch_page, "s1.html");
        assert!(s1.include_common_resources);
        assert_eq!(s1.files[0].src, vec!["s1.html".to_string()]);
        assert!(!s1.files[0].expand);
        assert_eq!(s1.resource_id(), "S1_resource");

        let s2 = config.sco("S2").unwrap();
        assert_eq!(s2.module_title, "Second");
        assert_eq!(s2.launch_page, "index.html");
        assert_eq!(s2.prereq_id.as_deref(), Some("S1"));
        assert_eq!(s2.mastery_score, Some(80));
        assert!(s2.files.is_empty());
    }

    #[test]
    fn test_parse_json_with_grunt_names() {
        let content = r#"{
            "courseId": "C1",
            "SCOtitle": "Grunt Course",
            "schemaDir": "schemas/",
            "scos": [
                {
                    "id": "S1",
                    "moduleTitle": "Intro",
                    "launchPage": "s1.html",
                    "prereqId": "",
                    "masteryScore": 70,
                    "files": [{ "cwd": "src", "src": ["*.html"], "expand": true }]
                }
            ]
        }"#;
        let config = CourseConfig::parse(
            content,
            Path::new("scorm.json"),
            &CourseOverrides::default(),
        )
        .unwrap();

        assert_eq!(config.course_id, "C1");
        assert_eq!(config.title, "Grunt Course");
        assert_eq!(config.schema_dir, "schemas/");
        assert!(config.profile.schema_location.contains("schemas/imscp_v1p1.xsd"));

        let sco = &config.scos[0];
        assert_eq!(sco.module_title, "Intro");
        assert_eq!(sco.prereq_id, None);
        assert_eq!(sco.mastery_score, Some(70));
        assert_eq!(sco.files[0].cwd, Path::new("src"));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = CourseOverrides {
            version: Some("1.2".to_string()),
            schema_dir: Some("xsd/".to_string()),
            output_dir: Some(PathBuf::from("dist")),
        };
        let config = CourseConfig::parse(
            "version = \"2004\"\npath = \"build\"\n",
            Path::new("course/Scorm.toml"),
            &overrides,
        )
        .unwrap();

        assert_eq!(config.version, "1.2");
        assert_eq!(config.profile.version, ScormVersion::Scorm12);
        assert_eq!(config.schema_dir, "xsd/");
        assert_eq!(config.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_unknown_version_falls_back_to_2004() {
        let config = parse_toml("version = \"2004 4th Edition\"").unwrap();
        assert_eq!(config.profile.version, ScormVersion::Scorm2004);
        assert_eq!(config.version, "2004 4th Edition");
    }

    #[test]
    fn test_common_required_for_dependency() {
        let err = config_error(parse_toml(
            r#"
[[sco]]
id = "S1"
include-common-resources = true
"#,
        ));
        assert_eq!(
            err,
            ConfigError::MissingCommonResource {
                sco: "S1".to_string()
            }
        );
        assert!(err.help().is_some());
    }

    #[test]
    fn test_duplicate_sco_ids_rejected() {
        let err = config_error(parse_toml(
            r#"
[[sco]]
id = "S1"

[[sco]]
id = "S1"
"#,
        ));
        assert_eq!(
            err,
            ConfigError::DuplicateScoId {
                id: "S1".to_string()
            }
        );
    }

    #[test]
    fn test_common_id_collision_rejected() {
        let err = config_error(parse_toml(
            r#"
[common]
id = "S1_resource"

[[sco]]
id = "S1"
"#,
        ));
        assert_eq!(
            err,
            ConfigError::IdentifierCollision {
                id: "S1_resource".to_string()
            }
        );
    }

    #[test]
    fn test_common_id_matching_sco_id_rejected() {
        let err = config_error(parse_toml(
            r#"
[common]
id = "S1"

[[sco]]
id = "S1"
"#,
        ));
        assert_eq!(
            err,
            ConfigError::IdentifierCollision {
                id: "S1".to_string()
            }
        );
    }

    #[test]
    fn test_sco_id_matching_other_resource_id_rejected() {
        let err = config_error(parse_toml(
            r#"
[[sco]]
id = "A"

[[sco]]
id = "A_resource"
"#,
        ));
        assert_eq!(
            err,
            ConfigError::IdentifierCollision {
                id: "A_resource".to_string()
            }
        );
    }

    #[test]
    fn test_mastery_score_range() {
        let err = config_error(parse_toml(
            r#"
[[sco]]
id = "S1"
mastery-score = 101
"#,
        ));
        assert_eq!(
            err,
            ConfigError::MasteryScoreOutOfRange {
                sco: "S1".to_string(),
                score: 101
            }
        );
    }

    #[test]
    fn test_empty_ids_rejected() {
        assert_eq!(
            config_error(parse_toml("course-id = \"\"")),
            ConfigError::EmptyCourseId
        );
        assert_eq!(
            config_error(parse_toml("[[sco]]\nid = \" \"\n")),
            ConfigError::EmptyScoId { index: 0 }
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let result = CourseConfig::parse("", Path::new("course.yaml"), &CourseOverrides::default());
        assert!(matches!(
            config_error(result),
            ConfigError::UnsupportedFormat { .. }
        ));
    }

    #[test]
    fn test_generated_course_parses() {
        let content = generate_default_course("demo", "1.2");
        let config = parse_toml(&content).unwrap();
        assert_eq!(config.course_id, "demo");
        assert_eq!(config.profile.version, ScormVersion::Scorm12);
        assert_eq!(config.scos.len(), 1);
        assert!(config.scos[0].files[0].expand);
    }

    #[test]
    fn test_generated_course_escapes_course_id() {
        for id in ["Intro \"101\"", "C:\\courses", "it's"] {
            let content = generate_default_course(id, "2004");
            let config = parse_toml(&content).unwrap();
            assert_eq!(config.course_id, id);
            assert_eq!(config.title, id);
        }
    }
}
