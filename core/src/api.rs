use crate::error::Result;
use crate::extraction::tags::{
    get_multi_string_value, get_string_or_unknown, PATIENT_ID, PIXEL_SPACING,
    SERIES_INSTANCE_UID, SLICE_THICKNESS, STUDY_DATE, STUDY_INSTANCE_UID,
};
use crate::types::{PixelSpacing, SliceMetadata};
use dicom_object::InMemDicomObject;
use log::debug;
use std::path::Path;

/// Main extractor for slice metadata
///
/// Provides a high-level API for extracting the identifying and acquisition
/// metadata the pipeline needs from a DICOM file. Absent header fields
/// default to the `"Unknown"` sentinel rather than failing.
///
/// # Example
///
/// ```
/// use dicurate_core::SliceExtractor;
/// use dicom_object::InMemDicomObject;
/// use dicom_core::{DataElement, PrimitiveValue, VR, Tag};
/// use std::path::PathBuf;
///
/// let mut dcm = InMemDicomObject::new_empty();
///
/// dcm.put(DataElement::new(
///     Tag(0x0010, 0x0020), // PatientID
///     VR::LO,
///     PrimitiveValue::from("P1"),
/// ));
/// dcm.put(DataElement::new(
///     Tag(0x0020, 0x000D), // StudyInstanceUID
///     VR::UI,
///     PrimitiveValue::from("1.2.3"),
/// ));
/// dcm.put(DataElement::new(
///     Tag(0x0018, 0x0050), // SliceThickness
///     VR::DS,
///     PrimitiveValue::from("1.25"),
/// ));
///
/// let record = SliceExtractor::extract(&dcm, PathBuf::from("slice.dcm"));
///
/// assert_eq!(record.patient_id, "P1");
/// assert_eq!(record.study_instance_uid, "1.2.3");
/// assert_eq!(record.slice_thickness, "1.25");
/// // Absent fields fall back to the sentinel
/// assert_eq!(record.series_instance_uid, "Unknown");
/// ```
pub struct SliceExtractor;

impl SliceExtractor {
    /// Extracts a metadata record from an in-memory DICOM object
    ///
    /// Every field has a sentinel default, so in-memory extraction is
    /// infallible; only reading the file from disk can fail.
    pub fn extract(dcm: &InMemDicomObject, file_path: impl Into<std::path::PathBuf>) -> SliceMetadata {
        SliceMetadata {
            patient_id: get_string_or_unknown(dcm, PATIENT_ID),
            study_instance_uid: get_string_or_unknown(dcm, STUDY_INSTANCE_UID),
            series_instance_uid: get_string_or_unknown(dcm, SERIES_INSTANCE_UID),
            slice_thickness: get_string_or_unknown(dcm, SLICE_THICKNESS),
            pixel_spacing: Self::extract_pixel_spacing(dcm),
            study_date: get_string_or_unknown(dcm, STUDY_DATE),
            file_path: file_path.into(),
        }
    }

    /// Reads a DICOM file and extracts its metadata record
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed as DICOM.
    pub fn extract_file(path: &Path) -> Result<SliceMetadata> {
        let dcm = dicom_object::open_file(path)?;
        Ok(Self::extract(&dcm, path))
    }

    /// Extracts the pixel spacing pair, if present and parseable
    fn extract_pixel_spacing(dcm: &InMemDicomObject) -> Option<PixelSpacing> {
        let raw = get_multi_string_value(dcm, PIXEL_SPACING)?.join("\\");
        match PixelSpacing::parse(&raw) {
            Ok(ps) => Some(ps),
            Err(e) => {
                debug!("Unparseable PixelSpacing '{}': {}", raw, e);
                None
            }
        }
    }
}
