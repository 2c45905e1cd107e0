use thiserror::Error;

/// Result type for dicurate operations
pub type Result<T> = std::result::Result<T, DicurateError>;

/// Error types for dicurate operations
#[derive(Error, Debug)]
pub enum DicurateError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Invalid tag value
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// Filesystem reorganization error
    #[error("Organize error: {0}")]
    OrganizeError(String),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for DicurateError {
    fn from(s: String) -> Self {
        DicurateError::InvalidValue(s)
    }
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for DicurateError {
    fn from(e: dicom_object::ReadError) -> Self {
        DicurateError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for DicurateError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        DicurateError::InvalidValue(format!("{}", e))
    }
}
