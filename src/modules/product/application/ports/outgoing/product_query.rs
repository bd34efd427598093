// src/modules/product/application/ports/outgoing/product_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::domain::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListFilter {
    /// Hide soft-deleted products. On by default.
    pub active_only: bool,
    pub category: Option<String>,
}

impl Default for ProductListFilter {
    fn default() -> Self {
        Self {
            active_only: true,
            category: None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// Newest first.
    async fn list_products(&self, filter: ProductListFilter)
        -> Result<Vec<Product>, ProductQueryError>;

    /// Inactive products are returned too.
    async fn get_product(&self, product_id: Uuid) -> Result<Option<Product>, ProductQueryError>;

    /// Bulk lookup for order hydration. Missing ids are simply absent from the result.
    async fn find_by_ids(&self, product_ids: &[Uuid]) -> Result<Vec<Product>, ProductQueryError>;
}
