use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::domain::{Product, ProductValidationError};
use crate::modules::product::application::ports::outgoing::PatchProductData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchProductError {
    #[error("Product not found")]
    NotFound,

    #[error("{0}")]
    InvalidInput(#[from] ProductValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchProductUseCase: Send + Sync {
    async fn execute(
        &self,
        product_id: Uuid,
        data: PatchProductData,
    ) -> Result<Product, PatchProductError>;
}
