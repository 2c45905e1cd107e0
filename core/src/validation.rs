use log::{info, warn};
use std::path::PathBuf;

/// Filters candidate paths down to parseable DICOM files
///
/// Each candidate is opened and parsed; a file that fails to parse is
/// logged at warn level and excluded. A single bad file never aborts the
/// batch.
pub fn validate_files(candidates: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut valid = Vec::with_capacity(candidates.len());
    for path in candidates {
        match dicom_object::open_file(&path) {
            Ok(_) => valid.push(path),
            Err(e) => {
                warn!("Invalid DICOM file: {}, Error: {}", path.display(), e);
            }
        }
    }
    info!("Valid DICOM files: {}", valid.len());
    valid
}
