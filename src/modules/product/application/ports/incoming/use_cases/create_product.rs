use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::modules::product::application::domain::{Product, ProductValidationError};

/// Unvalidated create input. Optional fields fall back to catalog defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    pub category: String,
    pub offer: Option<String>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProductError {
    #[error("{0}")]
    InvalidInput(#[from] ProductValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, input: CreateProductInput) -> Result<Product, CreateProductError>;
}
