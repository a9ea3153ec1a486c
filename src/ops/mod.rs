//! High-level operations.
//!
//! This module contains the manifest pipeline and the implementation of
//! scormgen commands.

pub mod build_manifest;
pub mod expand;
pub mod scormgen_generate;
pub mod scormgen_init;
pub mod write_manifest;

/// File name of the generated manifest.
pub const MANIFEST_FILE_NAME: &str = "imsmanifest.xml";

pub use build_manifest::build_manifest;
pub use expand::{expand_file_group, expand_file_groups, ResolvedFile};
pub use scormgen_generate::{generate, generate_from_config, GenerateOptions, GenerateResult};
pub use scormgen_init::{init_course, InitOptions};
pub use write_manifest::{render_manifest, write_manifest};
