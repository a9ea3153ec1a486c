//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// scormgen - Generate SCORM IMS manifests from a course description
#[derive(Parser)]
#[command(name = "scormgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate imsmanifest.xml from the course file
    Generate(GenerateArgs),

    /// Create a starter Scorm.toml
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Course file (defaults to Scorm.toml or scorm.json in the current directory)
    #[arg(short, long, env = "SCORMGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// SCORM version (1.2, 2004, 2004v3)
    #[arg(long)]
    pub scorm_version: Option<String>,

    /// Directory to write imsmanifest.xml into
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Prefix for SCORM 2004 schema locations
    #[arg(long)]
    pub schema_dir: Option<String>,

    /// Print the manifest to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Course identifier (defaults to directory name)
    #[arg(long)]
    pub course_id: Option<String>,

    /// SCORM version (1.2, 2004, 2004v3)
    #[arg(long, default_value = "2004")]
    pub scorm_version: String,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
