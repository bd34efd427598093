use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::domain::Product;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductCatalogError {
    #[error("Catalog error: {0}")]
    LookupFailed(String),
}

/// Read access to the catalog for resolving line items.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Unknown ids are left out of the result. Inactive products are included.
    async fn find_products(&self, product_ids: &[Uuid]) -> Result<Vec<Product>, ProductCatalogError>;
}
