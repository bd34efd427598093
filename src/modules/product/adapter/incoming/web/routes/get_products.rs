use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::outgoing::ProductListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// Also list soft-deleted products.
    pub include_inactive: Option<bool>,
    pub category: Option<String>,
}

impl From<ProductListQuery> for ProductListFilter {
    fn from(query: ProductListQuery) -> Self {
        Self {
            active_only: !query.include_inactive.unwrap_or(false),
            category: query.category.filter(|c| !c.trim().is_empty()),
        }
    }
}

/// List catalog products, newest first
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Products", body = [Product]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/products")]
pub async fn get_products_handler(
    query: web::Query<ProductListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.product.get_list.execute(query.into_inner().into()).await {
        Ok(products) => ApiResponse::success(products),
        Err(e) => {
            error!(error = %e, "Failed to list products");
            ApiResponse::internal_error()
        }
    }
}
