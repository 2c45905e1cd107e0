use crate::types::PixelSpacing;
use std::path::PathBuf;

/// Sentinel value for header fields absent from a DICOM file
pub const UNKNOWN: &str = "Unknown";

/// Flat metadata record for a single DICOM slice
///
/// One record per successfully parsed file. Identifier and date fields
/// default to [`UNKNOWN`] when the corresponding tag is absent; a missing
/// field is never an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SliceMetadata {
    /// Patient identifier (PatientID, 0010,0020)
    pub patient_id: String,

    /// Study identifier (StudyInstanceUID, 0020,000D)
    pub study_instance_uid: String,

    /// Series identifier (SeriesInstanceUID, 0020,000E)
    pub series_instance_uid: String,

    /// Nominal slice thickness in mm, as written in the header
    pub slice_thickness: String,

    /// Physical pixel spacing, if present
    pub pixel_spacing: Option<PixelSpacing>,

    /// Study date (StudyDate, 0008,0020)
    pub study_date: String,

    /// Location of the file on disk
    ///
    /// Updated in place by the organizer after the file is moved, so the
    /// store always persists the current on-disk location.
    pub file_path: PathBuf,
}

impl SliceMetadata {
    /// String form of the pixel spacing for storage
    pub fn pixel_spacing_storage(&self) -> String {
        self.pixel_spacing
            .map(|ps| ps.to_storage_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Slice thickness as a number, if the header value parses as one
    pub fn numeric_slice_thickness(&self) -> Option<f64> {
        if self.slice_thickness == UNKNOWN {
            return None;
        }
        self.slice_thickness.trim().parse::<f64>().ok()
    }
}
