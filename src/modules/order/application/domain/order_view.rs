use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::order::{Order, OrderItem};
use crate::modules::product::application::domain::Product;

/// Limited profile of the customer who placed an order.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderOwner {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Bare id, or the resolved profile on single-order lookups.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum OrderUser {
    Id(Uuid),
    Profile(OrderOwner),
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemView {
    pub product_id: Uuid,
    /// `null` once the product has been permanently deleted.
    pub product: Option<Product>,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user: OrderUser,
    pub items: Vec<OrderItemView>,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub phone: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderView {
    /// Builds the view; `resolve` maps a product id to its current catalog entry.
    pub fn build<F>(order: Order, user: OrderUser, resolve: F) -> Self
    where
        F: Fn(&Uuid) -> Option<Product>,
    {
        let items = order
            .items
            .into_iter()
            .map(|OrderItem { product_id, quantity, price }| OrderItemView {
                product: resolve(&product_id),
                product_id,
                quantity,
                price,
            })
            .collect();

        Self {
            id: order.id,
            user,
            items,
            total_amount: order.total_amount,
            delivery_address: order.delivery_address,
            phone: order.phone,
            status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
