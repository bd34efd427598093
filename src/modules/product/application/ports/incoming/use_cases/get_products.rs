use async_trait::async_trait;

use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::outgoing::ProductListFilter;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProductsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    async fn execute(&self, filter: ProductListFilter) -> Result<Vec<Product>, GetProductsError>;
}
