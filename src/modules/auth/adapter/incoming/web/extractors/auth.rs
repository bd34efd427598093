use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::{shared::api::ApiResponse, AppState};

pub const NO_TOKEN_MESSAGE: &str = "Not authorized, no token";
pub const TOKEN_FAILED_MESSAGE: &str = "Not authorized, token failed";

/// Identity resolved from a valid bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let token_provider = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| {
            tracing::error!("Token provider is not registered as app data");
            create_api_error(ApiResponse::internal_error())
        })?;

    let token = extract_token_from_header(req)
        .ok_or_else(|| create_api_error(ApiResponse::unauthorized(NO_TOKEN_MESSAGE)))?;

    match token_provider.verify_token(&token) {
        Ok(claims) => Ok(AuthenticatedUser {
            user_id: claims.sub.into(),
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Bearer token rejected");
            Err(create_api_error(ApiResponse::unauthorized(
                TOKEN_FAILED_MESSAGE,
            )))
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// Caller allowed to mutate the catalog. Anonymous unless
/// `PRODUCT_WRITES_REQUIRE_AUTH` is on, in which case a valid bearer token is required.
#[derive(Debug, Clone, Copy)]
pub struct ProductWriter {
    pub user_id: Option<UserId>,
}

impl FromRequest for ProductWriter {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let requires_auth = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.policy.product_writes_require_auth)
            .unwrap_or(false);

        if !requires_auth {
            return ready(Ok(ProductWriter { user_id: None }));
        }

        ready(authenticate(req).map(|user| ProductWriter {
            user_id: Some(user.user_id),
        }))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
