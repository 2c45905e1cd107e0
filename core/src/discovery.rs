use crate::error::Result;
use log::{info, warn};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension of the source format
pub const DICOM_EXTENSION: &str = "dcm";

/// Recursively discovers candidate DICOM files under a root directory
///
/// Matches on the `.dcm` extension, case-insensitively, at any depth.
/// Output is sorted by path so a run's logs are reproducible.
///
/// # Errors
///
/// Fails with an I/O error when the root is missing or not a directory.
/// Unreadable subdirectories are logged and skipped.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    let meta = std::fs::metadata(root)?;
    if !meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("{} is not a directory", root.display()),
        )
        .into());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() {
            if let Some(ext) = path.extension() {
                if ext.eq_ignore_ascii_case(DICOM_EXTENSION) {
                    files.push(path.to_path_buf());
                }
            }
        }
    }

    // Sort by path for consistent ordering
    files.sort();

    info!("Total DICOM files found: {}", files.len());
    Ok(files)
}
