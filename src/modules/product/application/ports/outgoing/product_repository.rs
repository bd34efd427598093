// src/modules/product/application/ports/outgoing/product_repository.rs

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::product::application::domain::Product;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit partial-update semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep DB value
// - Null: explicitly null => clear the column (nullable fields only)
// - Value(v): replace with v
//
// Use with #[serde(default)] so an omitted field becomes Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated input for a new catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductData {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub offer: Option<String>,
    pub stock: i32,
    pub is_active: bool,
}

/// Only `offer` is nullable; every other field is Unset or Value once validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProductData {
    pub name: PatchField<String>,
    pub description: PatchField<String>,
    pub price: PatchField<Decimal>,
    pub image: PatchField<String>,
    pub category: PatchField<String>,
    pub offer: PatchField<String>,
    pub stock: PatchField<i32>,
    pub is_active: PatchField<bool>,
}

impl PatchProductData {
    pub fn is_empty(&self) -> bool {
        self.name.is_unset()
            && self.description.is_unset()
            && self.price.is_unset()
            && self.image.is_unset()
            && self.category.is_unset()
            && self.offer.is_unset()
            && self.stock.is_unset()
            && self.is_active.is_unset()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductRepositoryError {
    #[error("Product not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(&self, data: CreateProductData)
        -> Result<Product, ProductRepositoryError>;

    /// Applies only the supplied fields. Inactive products are patchable.
    async fn patch_product(
        &self,
        product_id: Uuid,
        data: PatchProductData,
    ) -> Result<Product, ProductRepositoryError>;
}
