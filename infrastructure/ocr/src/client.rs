use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client configuration for the OCR engine.
pub struct OcrClient {
    pub client: Client,
    pub base_url: String,
}

impl OcrClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the text extraction endpoint URL.
    pub fn ocr_url(&self) -> String {
        format!("{}/ocr", self.base_url)
    }
}
