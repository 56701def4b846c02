use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Read-only access to the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every catalog product in insertion order.
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn ping(&self) -> Result<(), RepositoryError>;
}
