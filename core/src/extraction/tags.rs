use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Patient Tags
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);

// Study/Series Identification Tags
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);

// Acquisition Geometry Tags
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
}

/// Helper to get a header field with the "Unknown" sentinel default
///
/// An absent or unreadable tag yields the sentinel, never an error.
pub fn get_string_or_unknown(dcm: &InMemDicomObject, tag: Tag) -> String {
    get_string_value(dcm, tag).unwrap_or_else(|| crate::types::UNKNOWN.to_string())
}

/// Helper to get multi-string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to Vec<String>
pub fn get_multi_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<String>> {
    dcm.element(tag).ok().and_then(|elem| {
        // Try to get as multi-string
        if let Ok(strs) = elem.to_multi_str() {
            Some(strs.iter().map(|s| s.to_string()).collect())
        } else {
            // Fallback: try to get as single string and split by backslash
            elem.to_str()
                .ok()
                .map(|s| s.split('\\').map(|part| part.trim().to_string()).collect())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};

    #[test]
    fn test_tag_values() {
        // Just ensure tags are correctly defined
        assert_eq!(PATIENT_ID, Tag(0x0010, 0x0020));
        assert_eq!(STUDY_INSTANCE_UID, Tag(0x0020, 0x000D));
        assert_eq!(SERIES_INSTANCE_UID, Tag(0x0020, 0x000E));
        assert_eq!(SLICE_THICKNESS, Tag(0x0018, 0x0050));
        assert_eq!(PIXEL_SPACING, Tag(0x0028, 0x0030));
    }

    #[test]
    fn test_get_string_or_unknown_defaults() {
        let dcm = InMemDicomObject::new_empty();
        assert_eq!(get_string_or_unknown(&dcm, PATIENT_ID), "Unknown");
    }

    #[test]
    fn test_get_string_or_unknown_present() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            PATIENT_ID,
            VR::LO,
            PrimitiveValue::from("P1"),
        ));
        assert_eq!(get_string_or_unknown(&dcm, PATIENT_ID), "P1");
    }
}
