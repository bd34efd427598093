use actix_web::{put, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::ProductWriter;
use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::incoming::use_cases::PatchProductError;
use crate::modules::product::application::ports::outgoing::{PatchField, PatchProductData};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitted fields are left untouched; `offer: null` clears the promotion label.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatchProductRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: PatchField<Decimal>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub category: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub offer: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub stock: PatchField<i32>,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_active: PatchField<bool>,
}

impl From<PatchProductRequest> for PatchProductData {
    fn from(req: PatchProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            image: req.image,
            category: req.category,
            offer: req.offer,
            stock: req.stock,
            is_active: req.is_active,
        }
    }
}

/// Partially update a product
#[utoipa::path(
    put,
    path = "/api/products/{product_id}",
    tag = "products",
    params(("product_id" = Uuid, Path, description = "Product id")),
    request_body = PatchProductRequest,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Unknown product", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/products/{product_id}")]
pub async fn patch_product_handler(
    _writer: ProductWriter,
    path: web::Path<Uuid>,
    body: web::Json<PatchProductRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data
        .product
        .patch
        .execute(product_id, body.into_inner().into())
        .await
    {
        Ok(product) => {
            info!(%product_id, "Product updated");
            ApiResponse::success(product)
        }
        Err(PatchProductError::NotFound) => ApiResponse::not_found("Product not found"),
        Err(PatchProductError::InvalidInput(e)) => {
            warn!(%product_id, error = %e, "Product update rejected");
            ApiResponse::bad_request(&e.to_string())
        }
        Err(e) => {
            error!(%product_id, error = %e, "Failed to update product");
            ApiResponse::internal_error()
        }
    }
}
