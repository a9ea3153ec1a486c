//! Implementation of `scormgen generate`.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::{CourseConfig, CourseOverrides};
use crate::ops::build_manifest::build_manifest;
use crate::ops::write_manifest::{render_manifest, write_manifest};
use crate::util::fs::FileSystem;

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Course file to read
    pub course_file: PathBuf,

    /// Values overriding the course file
    pub overrides: CourseOverrides,

    /// Render only; leave the filesystem untouched
    pub dry_run: bool,
}

/// Outcome of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Rendered manifest
    pub xml: String,

    /// Where the manifest was written (None on a dry run)
    pub manifest_path: Option<PathBuf>,

    /// Number of SCO items in the organization
    pub sco_count: usize,

    /// Number of resources, including the common one
    pub resource_count: usize,
}

/// Load the course file, build the manifest and write it.
pub fn generate(opts: &GenerateOptions, fs: &dyn FileSystem) -> Result<GenerateResult> {
    let config = CourseConfig::load(&opts.course_file, &opts.overrides)?;
    generate_from_config(&config, fs, opts.dry_run)
}

/// Build and write the manifest for an already resolved course.
pub fn generate_from_config(
    config: &CourseConfig,
    fs: &dyn FileSystem,
    dry_run: bool,
) -> Result<GenerateResult> {
    tracing::debug!(
        "generating SCORM {} manifest for `{}`",
        config.profile.version,
        config.course_id
    );

    let doc = build_manifest(config, fs)?;
    let xml = render_manifest(&doc, &config.profile)?;

    let manifest_path = if dry_run {
        None
    } else {
        Some(write_manifest(&config.output_dir, &xml)?)
    };

    Ok(GenerateResult {
        sco_count: doc.items().len(),
        resource_count: doc.resources.len(),
        xml,
        manifest_path,
    })
}
