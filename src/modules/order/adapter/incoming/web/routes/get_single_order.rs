use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::order::application::domain::OrderView;
use crate::modules::order::application::ports::incoming::use_cases::GetSingleOrderError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one order with its owner's limited profile
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = "orders",
    params(("order_id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order", body = OrderView),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Unknown order", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/orders/{order_id}")]
pub async fn get_single_order_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data.order.get_single.execute(user.user_id, order_id).await {
        Ok(order) => ApiResponse::success(order),
        Err(GetSingleOrderError::NotFound) => ApiResponse::not_found("Order not found"),
        Err(e) => {
            error!(%order_id, error = %e, "Failed to fetch order");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::order::application::domain::{OrderOwner, OrderUser};
    use crate::modules::order::application::ports::incoming::use_cases::GetSingleOrderUseCase;
    use crate::shared::api::custom_path_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, token_provider_data};
    use crate::tests::support::fixtures::sample_order;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::json;

    /// Serves one order owned by `owner`, regardless of who asks.
    struct OneOrder {
        order_id: Uuid,
        owner: Uuid,
    }

    #[async_trait]
    impl GetSingleOrderUseCase for OneOrder {
        async fn execute(
            &self,
            _requester: UserId,
            order_id: Uuid,
        ) -> Result<OrderView, GetSingleOrderError> {
            if order_id != self.order_id {
                return Err(GetSingleOrderError::NotFound);
            }
            let mut order = sample_order(self.owner, vec![(Uuid::new_v4(), 1, 100)]);
            order.id = order_id;
            let profile = OrderOwner {
                id: self.owner,
                first_name: "Bea".to_string(),
                last_name: "Buyer".to_string(),
                email: "bea@grocify.com".to_string(),
            };
            Ok(OrderView::build(order, OrderUser::Profile(profile), |_| None))
        }
    }

    fn state_for(uc: OneOrder) -> web::Data<AppState> {
        TestAppStateBuilder::default()
            .with_get_single_order(uc)
            .build()
    }

    #[actix_web::test]
    async fn test_order_includes_owner_profile() {
        let order_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(state_for(OneOrder { order_id, owner }))
                .app_data(token_provider_data())
                .app_data(custom_path_config())
                .service(get_single_order_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/orders/{}", order_id))
            .insert_header(bearer_header(owner))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["_id"], order_id.to_string());
        assert_eq!(body["user"]["_id"], owner.to_string());
        assert_eq!(body["user"]["firstName"], "Bea");
        assert_eq!(body["user"]["email"], "bea@grocify.com");
    }

    // Without ORDER_ENFORCE_OWNERSHIP any authenticated caller can read any order.
    #[actix_web::test]
    async fn test_other_user_can_read_order_by_default() {
        let order_id = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(state_for(OneOrder {
                    order_id,
                    owner: Uuid::new_v4(),
                }))
                .app_data(token_provider_data())
                .app_data(custom_path_config())
                .service(get_single_order_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/orders/{}", order_id))
            .insert_header(bearer_header(Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_unknown_order_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(state_for(OneOrder {
                    order_id: Uuid::new_v4(),
                    owner: Uuid::new_v4(),
                }))
                .app_data(token_provider_data())
                .app_data(custom_path_config())
                .service(get_single_order_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/orders/{}", Uuid::new_v4()))
            .insert_header(bearer_header(Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Order not found" }));
    }

    #[actix_web::test]
    async fn test_requires_token() {
        let order_id = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(state_for(OneOrder {
                    order_id,
                    owner: Uuid::new_v4(),
                }))
                .app_data(token_provider_data())
                .app_data(custom_path_config())
                .service(get_single_order_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/orders/{}", order_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
