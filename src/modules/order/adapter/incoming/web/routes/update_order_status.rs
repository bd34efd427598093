use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::order::application::domain::OrderView;
use crate::modules::order::application::ports::incoming::use_cases::UpdateOrderStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateOrderStatusRequest {
    #[schema(example = "processing")]
    pub status: String,
}

/// Change an order's status
#[utoipa::path(
    put,
    path = "/api/orders/{order_id}/status",
    tag = "orders",
    params(("order_id" = Uuid, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Updated order", body = OrderView),
        (status = 400, description = "Blank status or rejected transition", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Unknown order", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/orders/{order_id}/status")]
pub async fn update_order_status_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<UpdateOrderStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data
        .order
        .update_status
        .execute(user.user_id, order_id, body.into_inner().status)
        .await
    {
        Ok(order) => {
            info!(%order_id, status = %order.status, "Order status updated");
            ApiResponse::success(order)
        }
        Err(UpdateOrderStatusError::NotFound) => ApiResponse::not_found("Order not found"),
        Err(UpdateOrderStatusError::InvalidInput(e)) => {
            warn!(%order_id, error = %e, "Order status change rejected");
            ApiResponse::bad_request(&e.to_string())
        }
        Err(e) => {
            error!(%order_id, error = %e, "Failed to update order status");
            ApiResponse::internal_error()
        }
    }
}
