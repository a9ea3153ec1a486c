//! scormgen - SCORM IMS manifest generator
//!
//! This crate turns a declarative course description into an
//! `imsmanifest.xml` that SCORM-compliant learning management systems can
//! import.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for scormgen unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides an in-memory filesystem and course fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    course::CourseConfig, document::ManifestDocument, error::ConfigError,
    version::VersionProfile,
};
pub use ops::MANIFEST_FILE_NAME;
