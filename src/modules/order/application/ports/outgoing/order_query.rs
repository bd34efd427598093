// src/modules/order/application/ports/outgoing/order_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::order::application::domain::Order;

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderQuery: Send + Sync {
    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, OrderQueryError>;

    /// Newest first. Line items keep their submitted order.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Order>, OrderQueryError>;
}
