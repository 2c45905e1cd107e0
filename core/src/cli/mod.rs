pub mod report;

use crate::organize::CollisionPolicy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for dicurate
#[derive(Parser, Debug)]
#[command(name = "dicurate")]
#[command(about = "DICOM ingestion pipeline: organize files, store metadata, report statistics")]
#[command(version)]
pub struct Cli {
    /// Root directory containing DICOM files
    #[arg(value_name = "DIRECTORY")]
    pub input: PathBuf,

    /// Base directory for the reorganized Patient/Study/Series hierarchy
    #[arg(short, long, default_value = "organized")]
    pub organized_dir: PathBuf,

    /// Path to the metadata database file
    #[arg(short, long, default_value = "metadata.db")]
    pub database: PathBuf,

    /// Behavior when a move destination filename already exists
    #[arg(short, long, default_value = "rename")]
    pub collision: CollisionPolicyArg,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Collision policy options for file reorganization
#[derive(Debug, Clone, ValueEnum)]
pub enum CollisionPolicyArg {
    /// Append a numeric suffix to the incoming filename
    Rename,
    /// Replace the existing file
    Overwrite,
    /// Abort the reorganization stage
    Fail,
}

impl From<CollisionPolicyArg> for CollisionPolicy {
    fn from(arg: CollisionPolicyArg) -> Self {
        match arg {
            CollisionPolicyArg::Rename => CollisionPolicy::Rename,
            CollisionPolicyArg::Overwrite => CollisionPolicy::Overwrite,
            CollisionPolicyArg::Fail => CollisionPolicy::Fail,
        }
    }
}
