//! End-to-end pipeline wiring.
//!
//! Discovery → validation → extraction → reorganization → persistence →
//! reporting, each stage completing before the next begins. Per-file
//! failures are logged and skipped; only an unreadable root, an unopenable
//! database, or a move collision under the fail policy abort the run.

use crate::api::SliceExtractor;
use crate::discovery::discover_files;
use crate::error::Result;
use crate::organize::{organize_files, CollisionPolicy};
use crate::report::{Histogram, SummaryStats};
use crate::store::MetadataStore;
use crate::types::SliceMetadata;
use crate::validation::validate_files;
use log::{error, info};
use std::path::PathBuf;

/// Configuration for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Root directory to scan for DICOM files
    pub input: PathBuf,
    /// Base directory of the reorganized hierarchy
    pub organized_dir: PathBuf,
    /// Database file path
    pub database: PathBuf,
    /// Move collision policy
    pub collision: CollisionPolicy,
}

/// What a pipeline run produced
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Candidate files discovered
    pub discovered: usize,
    /// Candidates that parsed as DICOM
    pub valid: usize,
    /// Records successfully extracted
    pub extracted: usize,
    /// Files moved into the hierarchy
    pub organized: usize,
    /// Whether the insertion batch committed
    pub stored: bool,
    /// Aggregate statistics over the store
    pub summary: SummaryStats,
    /// Thickness distribution, when numeric values exist
    pub histogram: Option<Histogram>,
}

/// Runs the full pipeline
pub fn run(config: &PipelineConfig) -> Result<PipelineOutcome> {
    let candidates = discover_files(&config.input)?;
    let discovered = candidates.len();

    let valid_paths = validate_files(candidates);
    let valid = valid_paths.len();

    let mut records = extract_metadata(&valid_paths);
    let extracted = records.len();

    let organized = organize_files(&mut records, &config.organized_dir, config.collision)?;

    let mut store = MetadataStore::open(&config.database)?;
    let stored = match store.insert_batch(&records) {
        Ok(()) => true,
        Err(e) => {
            // Whole batch rolled back; reporting still runs over prior state
            error!("Error inserting metadata: {}", e);
            false
        }
    };

    let summary = SummaryStats::compute(&store)?;
    let histogram = Histogram::compute(&store)?;

    Ok(PipelineOutcome {
        discovered,
        valid,
        extracted,
        organized,
        stored,
        summary,
        histogram,
    })
}

/// Extracts one record per validated path, skipping files that fail to read
fn extract_metadata(paths: &[PathBuf]) -> Vec<SliceMetadata> {
    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        match SliceExtractor::extract_file(path) {
            Ok(record) => records.push(record),
            Err(e) => {
                error!("Error reading file {}: {}", path.display(), e);
            }
        }
    }
    info!("Extracted metadata for {} files", records.len());
    records
}
