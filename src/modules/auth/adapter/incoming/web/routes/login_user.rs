use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_user::{LoginBody, LoginError, LoginRequest};
use crate::auth::application::use_cases::register_user::{
    AuthSession, RegistrationRequestError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

/// User login
///
/// Authenticates a user with email and password and returns the profile plus a bearer token.
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "users",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Login successful", body = AuthSession),
        (status = 400, description = "Missing email or password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials or malformed email",
            body = ErrorResponse,
            example = json!({ "message": "Invalid email or password" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/login")]
pub async fn login_user_handler(
    body: web::Json<LoginBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match LoginRequest::try_from(body.into_inner()) {
        Ok(req) => req,
        // A malformed address can never match an account.
        Err(RegistrationRequestError::InvalidEmailFormat) => {
            warn!("Login failed: malformed email");
            return ApiResponse::unauthorized("Invalid email or password");
        }
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.login_user_use_case.execute(request).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User logged in successfully");
            ApiResponse::success(session)
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("Invalid email or password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{UserId, UserProfile};
    use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    // ========================================================================
    // Mock Use Cases
    // ========================================================================

    #[derive(Clone)]
    struct MockLoginUserSuccess;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginUserSuccess {
        async fn execute(&self, request: LoginRequest) -> Result<AuthSession, LoginError> {
            Ok(AuthSession {
                user: UserProfile {
                    id: UserId::new(),
                    email: request.email().to_string(),
                    first_name: "Test".to_string(),
                    last_name: "User".to_string(),
                    phone: "9876543210".to_string(),
                    address: "123 Test Street".to_string(),
                    pincode: "123456".to_string(),
                    created_at: Utc::now(),
                },
                token: "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.access".to_string(),
            })
        }
    }

    #[derive(Clone)]
    struct MockLoginUserFails(LoginError);

    #[async_trait]
    impl ILoginUserUseCase for MockLoginUserFails {
        async fn execute(&self, _request: LoginRequest) -> Result<AuthSession, LoginError> {
            Err(self.0.clone())
        }
    }

    fn login_json() -> serde_json::Value {
        serde_json::json!({
            "email": "test@grocify.com",
            "password": "password123"
        })
    }

    async fn call_login(
        app_state: actix_web::web::Data<AppState>,
        payload: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(&payload)
            .to_request();

        test::call_service(&app, req).await
    }

    // ========================================================================
    // Tests
    // ========================================================================

    #[actix_web::test]
    async fn test_login_user_success() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginUserSuccess)
            .build();

        let resp = call_login(app_state, login_json()).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["_id"].is_string());
        assert_eq!(body["email"], "test@grocify.com");
        assert!(body["token"].is_string());
        assert!(body.get("password").is_none());
        assert!(body.get("passwordHash").is_none());
    }

    #[actix_web::test]
    async fn test_login_user_invalid_credentials() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginUserFails(LoginError::InvalidCredentials))
            .build();

        let resp = call_login(app_state, login_json()).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "message": "Invalid email or password" }));
    }

    #[actix_web::test]
    async fn test_login_user_query_error() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginUserFails(LoginError::QueryError(
                "Connection pool exhausted".to_string(),
            )))
            .build();

        let resp = call_login(app_state, login_json()).await;
        assert_eq!(resp.status(), 500);
    }

    #[actix_web::test]
    async fn test_login_user_missing_password_is_400() {
        let app_state = TestAppStateBuilder::default().build();

        let resp = call_login(app_state, serde_json::json!({ "email": "test@grocify.com" })).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }

    #[actix_web::test]
    async fn test_login_user_malformed_email_reads_as_invalid_credentials() {
        let app_state = TestAppStateBuilder::default().build();

        let resp = call_login(
            app_state,
            serde_json::json!({ "email": "not-an-email", "password": "password123" }),
        )
        .await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "message": "Invalid email or password" }));
    }

    #[actix_web::test]
    async fn test_login_user_blank_email_is_400() {
        let app_state = TestAppStateBuilder::default().build();

        let resp = call_login(
            app_state,
            serde_json::json!({ "email": "  ", "password": "password123" }),
        )
        .await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "message": "Email cannot be empty" }));
    }

    #[actix_web::test]
    async fn test_login_user_unknown_field_is_400() {
        let app_state = TestAppStateBuilder::default().build();

        let mut payload = login_json();
        payload["remember"] = serde_json::json!(true);

        let resp = call_login(app_state, payload).await;
        assert_eq!(resp.status(), 400);
    }
}
