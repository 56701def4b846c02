use super::{
    cors_config, ocr_config::OcrConfig, recognition_config::RecognitionConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub ocr: OcrConfig,
    pub recognition: RecognitionConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            ocr: OcrConfig::from_env(),
            recognition: RecognitionConfig::from_env(),
        }
    }
}
