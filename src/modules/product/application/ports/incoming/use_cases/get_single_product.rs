use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::domain::Product;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProductError {
    #[error("Product not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleProductUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<Product, GetSingleProductError>;
}
