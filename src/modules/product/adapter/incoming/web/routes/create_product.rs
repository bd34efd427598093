use actix_web::{post, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::ProductWriter;
use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::incoming::use_cases::{
    CreateProductError, CreateProductInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProductRequest {
    #[schema(example = "Dark Chocolate Bar")]
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = f64, example = 2.5)]
    pub price: Decimal,
    pub image: Option<String>,
    #[schema(example = "chocolate")]
    pub category: String,
    pub offer: Option<String>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
}

impl From<CreateProductRequest> for CreateProductInput {
    fn from(req: CreateProductRequest) -> Self {
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

/// Add a product to the catalog
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Bearer token required by policy", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/products")]
pub async fn create_product_handler(
    writer: ProductWriter,
    body: web::Json<CreateProductRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.product.create.execute(body.into_inner().into()).await {
        Ok(product) => {
            info!(
                product_id = %product.id,
                by = ?writer.user_id.map(|id| id.value()),
                "Product created"
            );
            ApiResponse::created(product)
        }
        Err(CreateProductError::InvalidInput(e)) => {
            warn!(error = %e, "Product rejected");
            ApiResponse::bad_request(&e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Failed to create product");
            ApiResponse::internal_error()
        }
    }
}
