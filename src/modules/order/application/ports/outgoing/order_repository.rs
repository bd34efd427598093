// src/modules/order/application/ports/outgoing/order_repository.rs

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::order::application::domain::{Order, OrderItem};

/// Validated order ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub phone: String,
    pub status: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderRepositoryError {
    #[error("Order not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists the order and its line items atomically.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderRepositoryError>;

    async fn update_status(
        &self,
        order_id: Uuid,
        status: String,
    ) -> Result<Order, OrderRepositoryError>;
}
