use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::register_user::{
    AuthSession, RegisterUserError, RegistrationBody, RegistrationRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

/// Register a customer
///
/// Creates the account and returns the public profile plus a bearer token.
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "users",
    request_body = RegistrationBody,
    responses(
        (status = 201, description = "User registered", body = AuthSession),
        (
            status = 400,
            description = "Validation failed or email already registered",
            body = ErrorResponse,
            example = json!({ "message": "User already exists" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/register")]
pub async fn register_user_handler(
    body: web::Json<RegistrationBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RegistrationRequest::try_from(body.into_inner()) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.register_user_use_case.execute(request).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "Registration succeeded");
            ApiResponse::created(session)
        }
        Err(RegisterUserError::EmailAlreadyExists) => {
            warn!("Registration rejected: email already registered");
            ApiResponse::bad_request("User already exists")
        }
        Err(e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
