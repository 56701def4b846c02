/// Failures of the recognition pipeline, one variant per stage.
/// Display strings are code-style identifiers for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("recognition.decode_failed")]
    Decode(String),
    #[error("recognition.invalid_geometry")]
    Geometry { width: u32, height: u32 },
    #[error("recognition.extraction_failed")]
    Extraction(String),
    #[error("recognition.catalog_unavailable")]
    Repository(#[from] crate::domain::errors::RepositoryError),
    #[error("recognition.worker_failed")]
    Worker(String),
}

impl RecognitionError {
    /// True when the uploaded image itself is at fault.
    pub fn is_unprocessable_image(&self) -> bool {
        matches!(
            self,
            RecognitionError::Decode(_) | RecognitionError::Geometry { .. }
        )
    }
}
