use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    /// Rows without a usable name cannot take part in matching.
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        if self.name.trim().is_empty() {
            return Err(RepositoryError::InvalidRecord);
        }

        Ok(Product::from_repository(
            self.id,
            self.name,
            self.description.filter(|d| !d.trim().is_empty()),
            self.created_at,
            self.updated_at,
        ))
    }
}
