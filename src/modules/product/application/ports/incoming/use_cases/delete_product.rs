use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteProductOutcome {
    SoftDeleted,
    PermanentlyDeleted,
}

impl DeleteProductOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            DeleteProductOutcome::SoftDeleted => "Product deleted successfully",
            DeleteProductOutcome::PermanentlyDeleted => "Product permanently deleted",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProductError {
    #[error("Product not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(
        &self,
        product_id: Uuid,
        permanent: bool,
    ) -> Result<DeleteProductOutcome, DeleteProductError>;
}
