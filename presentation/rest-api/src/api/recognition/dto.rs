use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::recognition::model::RecognitionOutcome;

/// Multipart form carrying the product photograph.
#[derive(Debug, Multipart)]
pub struct RecognizeProductRequest {
    /// Photograph of the product (PNG, JPEG, ...)
    pub file: Upload,
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
        }
    }
}

/// Recognized product plus the raw text read from the image.
#[derive(Debug, Clone, PartialEq, Object)]
pub struct RecognitionResponse {
    pub product: Option<ProductResponse>,
    pub extracted_text: String,
    /// Match score from 0 to 100
    pub score: Option<u8>,
}

impl From<RecognitionOutcome> for RecognitionResponse {
    fn from(outcome: RecognitionOutcome) -> Self {
        let score = outcome.result.score();
        let product = outcome.result.product().cloned().map(ProductResponse::from);
        Self {
            product,
            extracted_text: outcome.extracted_text,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::NewProductProps;
    use business::domain::recognition::matcher::MatchResult;

    #[test]
    fn should_map_matched_outcome_to_response() {
        let product = Product::new(NewProductProps {
            name: "Sprite 500ml".to_string(),
            description: None,
        })
        .unwrap();
        let id = product.id;

        let response = RecognitionResponse::from(RecognitionOutcome {
            extracted_text: "sprite 500ml".to_string(),
            result: MatchResult::Match { product, score: 100 },
        });

        assert_eq!(response.product.as_ref().map(|p| p.id), Some(id));
        assert_eq!(response.score, Some(100));
        assert_eq!(response.extracted_text, "sprite 500ml");
    }

    #[test]
    fn should_map_no_match_to_null_product() {
        let response = RecognitionResponse::from(RecognitionOutcome {
            extracted_text: "xyz123".to_string(),
            result: MatchResult::NoMatch,
        });

        assert_eq!(response.product, None);
        assert_eq!(response.score, None);
    }
}
