use actix_web::{delete, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::ProductWriter;
use crate::modules::product::application::ports::incoming::use_cases::DeleteProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteProductQuery {
    /// `true` removes the row. Any other value marks the product inactive.
    #[param(example = "true")]
    pub permanent: Option<String>,
}

impl DeleteProductQuery {
    pub fn is_permanent(&self) -> bool {
        self.permanent.as_deref() == Some("true")
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteProductResponse {
    #[schema(example = "Product deleted successfully")]
    pub message: String,
    #[schema(example = true)]
    pub deleted: bool,
}

/// Delete a product (soft by default)
#[utoipa::path(
    delete,
    path = "/api/products/{product_id}",
    tag = "products",
    params(
        ("product_id" = Uuid, Path, description = "Product id"),
        DeleteProductQuery
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteProductResponse),
        (status = 404, description = "Unknown product", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/products/{product_id}")]
pub async fn delete_product_handler(
    _writer: ProductWriter,
    path: web::Path<Uuid>,
    query: web::Query<DeleteProductQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();
    let permanent = query.is_permanent();

    match data.product.delete.execute(product_id, permanent).await {
        Ok(outcome) => {
            info!(%product_id, permanent, "Product deleted");
            ApiResponse::success(DeleteProductResponse {
                message: outcome.message().to_string(),
                deleted: true,
            })
        }
        Err(DeleteProductError::NotFound) => ApiResponse::not_found("Product not found"),
        Err(e) => {
            error!(%product_id, error = %e, "Failed to delete product");
            ApiResponse::internal_error()
        }
    }
}
