use std::io::Cursor;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};

use business::domain::recognition::errors::RecognitionError;
use business::domain::recognition::image::NormalizedImage;
use business::domain::recognition::services::TextExtractorService;

use crate::client::OcrClient;

#[derive(Serialize)]
struct OcrRequest {
    image_base64: String,
}

#[derive(Deserialize)]
struct OcrResponse {
    #[serde(alias = "raw_text")]
    text: String,
}

/// Sends normalized images to an HTTP OCR engine and returns the plain text.
pub struct TextExtractorHttp {
    client: OcrClient,
}

impl TextExtractorHttp {
    pub fn new(client: OcrClient) -> Self {
        Self { client }
    }

    fn encode_png(image: &NormalizedImage) -> Result<Vec<u8>, RecognitionError> {
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(image.pixels().clone())
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| RecognitionError::Extraction(format!("png encoding failed: {e}")))?;
        Ok(buffer.into_inner())
    }

    fn parse_response(body: &str) -> Result<String, RecognitionError> {
        let parsed: OcrResponse = serde_json::from_str(body)
            .map_err(|e| RecognitionError::Extraction(format!("invalid ocr response: {e}")))?;
        Ok(parsed.text.trim().to_string())
    }
}

#[async_trait]
impl TextExtractorService for TextExtractorHttp {
    async fn extract(&self, image: &NormalizedImage) -> Result<String, RecognitionError> {
        let png = Self::encode_png(image)?;
        let body = OcrRequest {
            image_base64: general_purpose::STANDARD.encode(png),
        };

        let response = self
            .client
            .client
            .post(self.client.ocr_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RecognitionError::Extraction(format!("ocr request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecognitionError::Extraction(format!(
                "ocr engine responded with {status}"
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| RecognitionError::Extraction(format!("ocr body unreadable: {e}")))?;

        Self::parse_response(&text)
    }
}
