use async_trait::async_trait;

use super::errors::RecognitionError;
use super::image::NormalizedImage;

/// Service port for an external OCR engine.
///
/// Implementations return whatever text the engine read, empty included, and
/// fail with [`RecognitionError::Extraction`] only when the engine itself fails.
#[async_trait]
pub trait TextExtractorService: Send + Sync {
    async fn extract(&self, image: &NormalizedImage) -> Result<String, RecognitionError>;
}
