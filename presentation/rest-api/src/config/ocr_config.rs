use std::env;
use std::time::Duration;

const DEFAULT_OCR_URL: &str = "http://127.0.0.1:8868";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the external OCR engine.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl OcrConfig {
    /// Environment variables:
    /// - OCR_SERVICE_URL: base URL of the OCR engine (default: "http://127.0.0.1:8868")
    /// - OCR_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("OCR_SERVICE_URL").ok(),
            env::var("OCR_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let timeout_secs = timeout_secs
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_OCR_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
