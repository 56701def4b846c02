use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::recognition::errors::RecognitionError;
use crate::domain::recognition::image::NormalizedImage;
use crate::domain::recognition::matcher::{CatalogMatcher, MatchResult};
use crate::domain::recognition::model::RecognitionOutcome;
use crate::domain::recognition::normalizer::ImageNormalizer;
use crate::domain::recognition::services::TextExtractorService;
use crate::domain::recognition::use_cases::recognize::{
    RecognizeProductParams, RecognizeProductUseCase,
};

pub struct RecognizeProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub extractor: Arc<dyn TextExtractorService>,
    pub normalizer: ImageNormalizer,
    pub matcher: CatalogMatcher,
    pub logger: Arc<dyn Logger>,
}

impl RecognizeProductUseCaseImpl {
    /// Image work is CPU bound, so it runs on the blocking pool.
    async fn normalize(&self, image: Vec<u8>) -> Result<NormalizedImage, RecognitionError> {
        let normalizer = self.normalizer;
        tokio::task::spawn_blocking(move || normalizer.normalize_bytes(&image))
            .await
            .map_err(|e| RecognitionError::Worker(format!("normalization task failed: {e}")))?
    }

    async fn match_catalog(
        &self,
        extracted_text: &str,
        catalog: Vec<Product>,
    ) -> Result<MatchResult, RecognitionError> {
        let matcher = self.matcher.clone();
        let text = extracted_text.to_string();
        tokio::task::spawn_blocking(move || matcher.find_best(&text, catalog))
            .await
            .map_err(|e| RecognitionError::Worker(format!("matching task failed: {e}")))
    }
}

#[async_trait]
impl RecognizeProductUseCase for RecognizeProductUseCaseImpl {
    async fn execute(
        &self,
        params: RecognizeProductParams,
    ) -> Result<RecognitionOutcome, RecognitionError> {
        self.logger.info(&format!(
            "Recognizing product from {} byte image",
            params.image.len()
        ));

        let normalized = self
            .normalize(params.image)
            .await
            .inspect_err(|err| self.logger.error(&format!("Image normalization failed: {err:?}")))?;
        self.logger.debug(&format!(
            "Normalized {}x{} image, corrected skew of {:.2} degrees",
            normalized.width(),
            normalized.height(),
            normalized.skew_degrees()
        ));

        let extracted_text = self
            .extractor
            .extract(&normalized)
            .await
            .inspect_err(|err| self.logger.error(&format!("Text extraction failed: {err:?}")))?;
        self.logger.debug(&format!(
            "Extracted {} characters of text",
            extracted_text.chars().count()
        ));

        let catalog = self
            .repository
            .list_products()
            .await
            .map_err(RecognitionError::from)
            .inspect_err(|err| self.logger.error(&format!("Catalog lookup failed: {err:?}")))?;
        let catalog_size = catalog.len();
        let result = self
            .match_catalog(&extracted_text, catalog)
            .await
            .inspect_err(|err| self.logger.error(&format!("Catalog matching failed: {err:?}")))?;

        match &result {
            MatchResult::Match { product, score } => self.logger.info(&format!(
                "Product recognized: {} (score: {}, catalog size: {})",
                product.name, score, catalog_size
            )),
            MatchResult::NoMatch => self.logger.warn(&format!(
                "No product above threshold {} among {} catalog entries",
                self.matcher.threshold(),
                catalog_size
            )),
        }

        Ok(RecognitionOutcome {
            extracted_text,
            result,
        })
    }
}
