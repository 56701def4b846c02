use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::product::repository::ProductRepository;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Catalog database status: "connected" or "unavailable"
    pub database: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    repository: Arc<dyn ProductRepository>,
}

impl Api {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service and of the catalog database.
    /// The service reports itself healthy even when the database is down so
    /// that liveness probes do not restart it.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let database = match self.repository.ping().await {
            Ok(()) => "connected",
            Err(_) => "unavailable",
        };

        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database.to_string(),
        })
    }
}
