use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::{domain::entities::UserProfile, use_cases::fetch_profile::FetchUserError},
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, web, Responder};
use tracing::error;

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the token holder", body = UserProfile),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/profile")]
pub async fn get_user_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_user_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(FetchUserError::UserNotFound) => ApiResponse::not_found("User not found"),

        Err(FetchUserError::QueryError(e)) => {
            error!(user_id = %user.user_id, "Database error fetching user profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::outgoing::user_query::UserQueryError;
    use crate::auth::application::use_cases::fetch_profile::FetchUserProfileUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    struct MockFetchProfileSuccess;

    #[async_trait]
    impl FetchUserProfileUseCase for MockFetchProfileSuccess {
        async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchUserError> {
            Ok(UserProfile {
                id: user_id,
                email: "test@grocify.com".to_string(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                phone: "9876543210".to_string(),
                address: "123 Test Street".to_string(),
                pincode: "123456".to_string(),
                created_at: Utc::now(),
            })
        }
    }

    struct MockFetchProfileFails(FetchUserError);

    #[async_trait]
    impl FetchUserProfileUseCase for MockFetchProfileFails {
        async fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchUserError> {
            Err(self.0.clone())
        }
    }

    #[actix_web::test]
    async fn test_get_profile_success() {
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_fetch_user_profile(MockFetchProfileSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_user_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users/profile")
            .insert_header(bearer_header(user_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["_id"], user_id.to_string());
        assert_eq!(body["lastName"], "User");
        assert!(body.get("password").is_none());
    }

    #[actix_web::test]
    async fn test_get_profile_without_token_is_401() {
        let app_state = TestAppStateBuilder::default()
            .with_fetch_user_profile(MockFetchProfileSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_user_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users/profile")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_get_profile_deleted_user_is_404() {
        let app_state = TestAppStateBuilder::default()
            .with_fetch_user_profile(MockFetchProfileFails(FetchUserError::UserNotFound))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_user_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users/profile")
            .insert_header(bearer_header(Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User not found");
    }

    #[actix_web::test]
    async fn test_get_profile_query_error_is_500() {
        let app_state = TestAppStateBuilder::default()
            .with_fetch_user_profile(MockFetchProfileFails(FetchUserError::QueryError(
                UserQueryError::DatabaseError("timeout".to_string()),
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_user_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users/profile")
            .insert_header(bearer_header(Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
