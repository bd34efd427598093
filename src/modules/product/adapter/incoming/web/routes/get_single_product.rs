use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::incoming::use_cases::GetSingleProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one product, including soft-deleted ones
#[utoipa::path(
    get,
    path = "/api/products/{product_id}",
    tag = "products",
    params(("product_id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Unknown product", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/products/{product_id}")]
pub async fn get_single_product_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data.product.get_single.execute(product_id).await {
        Ok(product) => ApiResponse::success(product),
        Err(GetSingleProductError::NotFound) => ApiResponse::not_found("Product not found"),
        Err(e) => {
            error!(error = %e, %product_id, "Failed to fetch product");
            ApiResponse::internal_error()
        }
    }
}
