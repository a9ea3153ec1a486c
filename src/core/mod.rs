//! Core data structures for scormgen.
//!
//! This module contains the foundational types:
//! - Course descriptions and their defaults
//! - SCORM version profiles
//! - The typed manifest document

pub mod course;
pub mod document;
pub mod error;
pub mod version;

pub use course::{
    find_course_file, CommonResourceSpec, CourseConfig, CourseOverrides, FileGroupSpec, ScoSpec,
    COURSE_FILE_ALIAS, COURSE_FILE_NAME,
};
pub use document::{Dependency, Item, ManifestDocument, Metadata, Organization, Resource, ScormType};
pub use error::ConfigError;
pub use version::{ScormVersion, VersionProfile};
