use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::OrderView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleOrderError {
    #[error("Order not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: UserId,
        order_id: Uuid,
    ) -> Result<OrderView, GetSingleOrderError>;
}
