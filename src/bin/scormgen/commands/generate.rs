//! `scormgen generate` command

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::cli::GenerateArgs;
use scormgen::core::{find_course_file, CourseOverrides};
use scormgen::ops::scormgen_generate::{generate, GenerateOptions};
use scormgen::util::RealFileSystem;

/// Pick the course file: `--config` wins, otherwise look in the current
/// directory.
fn resolve_course_file(config: Option<PathBuf>, cwd: &Path) -> Result<PathBuf> {
    match config {
        Some(path) => Ok(path),
        None => find_course_file(cwd).ok_or_else(|| {
            anyhow!(
                "could not find `Scorm.toml` or `scorm.json` in `{}`\n\
                 help: Run `scormgen init` to create one, or pass --config",
                cwd.display()
            )
        }),
    }
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let course_file = resolve_course_file(args.config, &cwd)?;

    let opts = GenerateOptions {
        course_file,
        overrides: CourseOverrides {
            version: args.scorm_version,
            schema_dir: args.schema_dir,
            output_dir: args.out,
        },
        dry_run: args.stdout,
    };

    let result = generate(&opts, &RealFileSystem)?;

    match result.manifest_path {
        Some(path) => {
            eprintln!(
                "     Created {} ({} sco, {} resources)",
                path.display(),
                result.sco_count,
                result.resource_count
            );
        }
        None => print!("{}", result.xml),
    }

    Ok(())
}
