use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::order::application::domain::OrderOwner;

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderOwnerDirectoryError {
    #[error("Owner lookup failed: {0}")]
    LookupFailed(String),
}

#[async_trait]
pub trait OrderOwnerDirectory: Send + Sync {
    async fn find_owner(&self, user_id: Uuid) -> Result<Option<OrderOwner>, OrderOwnerDirectoryError>;
}
