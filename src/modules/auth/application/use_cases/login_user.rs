use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

use super::register_user::{validate_email, AuthSession, RegistrationRequestError};

// ========================= Login Request =========================

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginBody {
    #[schema(example = "test@grocify.com")]
    pub email: String,
    #[schema(example = "password123", format = Password)]
    pub password: String,
}

/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "LoginBody")]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, RegistrationRequestError> {
        let email = validate_email(&email)?;

        if password.is_empty() {
            return Err(RegistrationRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl TryFrom<LoginBody> for LoginRequest {
    type Error = RegistrationRequestError;

    fn try_from(body: LoginBody) -> Result<Self, Self::Error> {
        LoginRequest::new(body.email, body.password)
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login User Use Case =============================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<AuthSession, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, request: LoginRequest) -> Result<AuthSession, LoginError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_access_token(user.id.value())
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthSession {
            user: UserProfile::from(&user),
            token,
        })
    }
}
