use actix_web::{post, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::order::application::domain::{OrderItem, OrderView};
use crate::modules::order::application::ports::incoming::use_cases::{
    CreateOrderError, CreateOrderInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderItemRequest {
    /// Product id.
    #[serde(alias = "productId")]
    pub product: Uuid,
    #[schema(example = 1)]
    pub quantity: i32,
    /// Unit price at order time.
    #[schema(value_type = f64, example = 2.5)]
    pub price: Decimal,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemRequest>,
    #[schema(value_type = f64, example = 2.5)]
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub phone: String,
}

impl From<CreateOrderRequest> for CreateOrderInput {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            items: req
                .items
                .into_iter()
                .map(|item| OrderItem {
                    product_id: item.product,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            total_amount: req.total_amount,
            delivery_address: req.delivery_address,
            phone: req.phone,
        }
    }
}

/// Place an order
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderView),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/orders")]
pub async fn create_order_handler(
    user: AuthenticatedUser,
    body: web::Json<CreateOrderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .order
        .create
        .execute(user.user_id, body.into_inner().into())
        .await
    {
        Ok(order) => {
            info!(order_id = %order.id, user_id = %user.user_id, "Order placed");
            ApiResponse::created(order)
        }
        Err(CreateOrderError::InvalidInput(e)) => {
            warn!(user_id = %user.user_id, error = %e, "Order rejected");
            ApiResponse::bad_request(&e.to_string())
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to place order");
            ApiResponse::internal_error()
        }
    }
}
