// src/modules/product/application/ports/outgoing/product_archiver.rs

use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductArchiverError {
    #[error("Product not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductArchiver: Send + Sync {
    /// Sets `is_active = false`. Succeeds for already inactive products.
    async fn soft_delete(&self, product_id: Uuid) -> Result<(), ProductArchiverError>;

    /// Removes the row. Stored order line items keep their product id.
    async fn hard_delete(&self, product_id: Uuid) -> Result<(), ProductArchiverError>;
}
