use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::OrderView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserOrdersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetUserOrdersUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<OrderView>, GetUserOrdersError>;
}
