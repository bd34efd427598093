use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::order::application::domain::OrderView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's orders, newest first
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    responses(
        (status = 200, description = "Orders placed by the caller", body = [OrderView]),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/orders")]
pub async fn get_user_orders_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.order.list_for_user.execute(user.user_id).await {
        Ok(orders) => ApiResponse::success(orders),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to list orders");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::order::application::domain::OrderUser;
    use crate::modules::order::application::ports::incoming::use_cases::{
        GetUserOrdersError, GetUserOrdersUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, token_provider_data};
    use crate::tests::support::fixtures::sample_order;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct OrdersOfCaller;

    #[async_trait]
    impl GetUserOrdersUseCase for OrdersOfCaller {
        async fn execute(&self, user_id: UserId) -> Result<Vec<OrderView>, GetUserOrdersError> {
            let owner = user_id.value();
            Ok(vec![
                OrderView::build(
                    sample_order(owner, vec![(Uuid::new_v4(), 1, 100)]),
                    OrderUser::Id(owner),
                    |_| None,
                ),
                OrderView::build(
                    sample_order(owner, vec![(Uuid::new_v4(), 3, 250)]),
                    OrderUser::Id(owner),
                    |_| None,
                ),
            ])
        }
    }

    struct Failing;

    #[async_trait]
    impl GetUserOrdersUseCase for Failing {
        async fn execute(&self, _user_id: UserId) -> Result<Vec<OrderView>, GetUserOrdersError> {
            Err(GetUserOrdersError::RepositoryError("down".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_lists_orders_for_token_subject() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_get_user_orders(OrdersOfCaller)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(get_user_orders_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/orders")
            .insert_header(bearer_header(user_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let orders = body.as_array().unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|o| o["user"] == user_id.to_string()));
    }

    #[actix_web::test]
    async fn test_invalid_token_is_401() {
        let state = TestAppStateBuilder::default()
            .with_get_user_orders(OrdersOfCaller)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(get_user_orders_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/orders")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_store_failure_is_500() {
        let state = TestAppStateBuilder::default()
            .with_get_user_orders(Failing)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(get_user_orders_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/orders")
            .insert_header(bearer_header(Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
