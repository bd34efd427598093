use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::{OrderItem, OrderValidationError, OrderView};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderInput {
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub phone: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateOrderError {
    #[error("{0}")]
    InvalidInput(#[from] OrderValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        input: CreateOrderInput,
    ) -> Result<OrderView, CreateOrderError>;
}
