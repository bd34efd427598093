use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::shared::money::{check_money, MoneyError};

/// One line of an order. `price` is the unit price at order time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub phone: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn product_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.items.iter().map(|item| item.product_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderValidationError {
    #[error("Order must contain at least one item")]
    NoItems,

    #[error("Item quantity must be at least 1")]
    InvalidQuantity,

    #[error("Item price must not be negative")]
    NegativePrice,

    #[error("Item price {0}")]
    InvalidPrice(MoneyError),

    #[error("Total amount must not be negative")]
    NegativeTotal,

    #[error("Total amount {0}")]
    InvalidTotal(MoneyError),

    #[error("Delivery address is required")]
    EmptyAddress,

    #[error("Phone is required")]
    EmptyPhone,

    #[error("Status is required")]
    EmptyStatus,

    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    #[error("Cannot change order status from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Product not found: {0}")]
    UnknownProduct(Uuid),
}

pub fn validate_items(items: &[OrderItem]) -> Result<(), OrderValidationError> {
    if items.is_empty() {
        return Err(OrderValidationError::NoItems);
    }

    for item in items {
        if item.quantity < 1 {
            return Err(OrderValidationError::InvalidQuantity);
        }
        if item.price < Decimal::ZERO {
            return Err(OrderValidationError::NegativePrice);
        }
        check_money(item.price).map_err(OrderValidationError::InvalidPrice)?;
    }

    Ok(())
}

pub fn validate_total(total: Decimal) -> Result<Decimal, OrderValidationError> {
    if total < Decimal::ZERO {
        return Err(OrderValidationError::NegativeTotal);
    }
    check_money(total).map_err(OrderValidationError::InvalidTotal)
}

pub fn validate_contact(
    delivery_address: &str,
    phone: &str,
) -> Result<(String, String), OrderValidationError> {
    let address = delivery_address.trim();
    if address.is_empty() {
        return Err(OrderValidationError::EmptyAddress);
    }

    let phone = phone.trim();
    if phone.is_empty() {
        return Err(OrderValidationError::EmptyPhone);
    }

    Ok((address.to_string(), phone.to_string()))
}
