use business::domain::recognition::matcher::DEFAULT_MATCH_THRESHOLD;
use std::env;

/// Tuning for the catalog matcher.
#[derive(Debug, Clone)]
pub struct RecognitionConfig {
    pub match_threshold: u8,
}

impl RecognitionConfig {
    /// Environment variables:
    /// - MATCH_THRESHOLD: minimum score (0-100) a product must exceed (default: 60)
    pub fn from_env() -> Self {
        Self {
            match_threshold: parse_threshold(env::var("MATCH_THRESHOLD").ok()),
        }
    }
}

fn parse_threshold(raw: Option<String>) -> u8 {
    raw.and_then(|v| v.trim().parse::<u8>().ok())
        .filter(|t| *t <= 100)
        .unwrap_or(DEFAULT_MATCH_THRESHOLD)
}
