use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::money::{check_money, MoneyError};

/// Catalog entry as returned by every product endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[schema(example = "Dairy Milk Silk")]
    pub name: String,
    #[schema(example = "Smooth milk chocolate bar")]
    pub description: String,
    #[schema(value_type = f64, example = 2.5)]
    pub price: Decimal,
    #[schema(example = "https://cdn.example.com/silk.png")]
    pub image: String,
    #[schema(example = "chocolate")]
    pub category: String,
    #[schema(example = "10% off")]
    pub offer: Option<String>,
    #[schema(example = 40)]
    pub stock: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductValidationError {
    #[error("Product name is required")]
    EmptyName,

    #[error("Product category is required")]
    EmptyCategory,

    #[error("Price must not be negative")]
    NegativePrice,

    #[error("Price {0}")]
    InvalidPrice(MoneyError),

    #[error("Stock must not be negative")]
    NegativeStock,

    #[error("{0} cannot be null")]
    NullNotAllowed(&'static str),
}

pub fn validate_name(name: &str) -> Result<String, ProductValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProductValidationError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn validate_category(category: &str) -> Result<String, ProductValidationError> {
    let category = category.trim();
    if category.is_empty() {
        return Err(ProductValidationError::EmptyCategory);
    }
    Ok(category.to_string())
}

pub fn validate_price(price: Decimal) -> Result<Decimal, ProductValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ProductValidationError::NegativePrice);
    }
    check_money(price).map_err(ProductValidationError::InvalidPrice)
}

pub fn validate_stock(stock: i32) -> Result<i32, ProductValidationError> {
    if stock < 0 {
        return Err(ProductValidationError::NegativeStock);
    }
    Ok(stock)
}
