//! Course configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// A course description that cannot produce a consistent manifest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("course id cannot be empty")]
    EmptyCourseId,

    #[error("sco #{index} has an empty id")]
    EmptyScoId { index: usize },

    #[error("duplicate sco id `{id}`")]
    DuplicateScoId { id: String },

    #[error("common resource id cannot be empty")]
    EmptyCommonId,

    #[error("identifier `{id}` is used more than once")]
    IdentifierCollision { id: String },

    #[error("sco `{sco}` includes common resources, but no [common] section is configured")]
    MissingCommonResource { sco: String },

    #[error("sco `{sco}` has mastery score {score}; expected 0-100")]
    MasteryScoreOutOfRange { sco: String, score: u32 },

    #[error("unsupported course file `{}`; expected .toml or .json", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl ConfigError {
    /// A hint for fixing the error, if one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ConfigError::MissingCommonResource { .. } => {
                Some("help: Add a [common] section or set include-common-resources = false")
            }
            ConfigError::DuplicateScoId { .. } | ConfigError::IdentifierCollision { .. } => {
                Some("help: Every sco id and the common id must be unique")
            }
            ConfigError::UnsupportedFormat { .. } => {
                Some("help: Run `scormgen init` to create a Scorm.toml")
            }
            _ => None,
        }
    }
}
