use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::{OrderValidationError, OrderView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateOrderStatusError {
    #[error("Order not found")]
    NotFound,

    #[error("{0}")]
    InvalidInput(#[from] OrderValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: UserId,
        order_id: Uuid,
        status: String,
    ) -> Result<OrderView, UpdateOrderStatusError>;
}
