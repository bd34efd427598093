use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{User, UserId, UserProfile, UserProfileFields};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};

// ====================== Registration Request ======================

/// Raw registration body as it arrives on the wire.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistrationBody {
    #[schema(example = "test@grocify.com")]
    pub email: String,
    #[schema(example = "password123", format = Password)]
    pub password: String,
    #[schema(example = "Test")]
    pub first_name: String,
    #[schema(example = "User")]
    pub last_name: String,
    #[schema(example = "9876543210")]
    pub phone: String,
    #[schema(example = "123 Test Street, Test City")]
    pub address: String,
    #[schema(example = "123456")]
    pub pincode: String,
}

/// Validated registration request. Only constructible through [`RegistrationRequest::new`].
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RegistrationBody")]
pub struct RegistrationRequest {
    email: String,
    password: String,
    profile: UserProfileFields,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password cannot be empty")]
    EmptyPassword,
    #[error("{0} cannot be empty")]
    MissingField(&'static str),
}

impl RegistrationRequest {
    pub fn new(
        email: String,
        password: String,
        profile: UserProfileFields,
    ) -> Result<Self, RegistrationRequestError> {
        let email = validate_email(&email)?;

        if password.is_empty() {
            return Err(RegistrationRequestError::EmptyPassword);
        }

        let profile = UserProfileFields {
            first_name: required("firstName", profile.first_name)?,
            last_name: required("lastName", profile.last_name)?,
            phone: required("phone", profile.phone)?,
            address: required("address", profile.address)?,
            pincode: required("pincode", profile.pincode)?,
        };

        Ok(Self {
            email,
            password,
            profile,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn profile(&self) -> &UserProfileFields {
        &self.profile
    }
}

/// Trims and checks syntax. Case is preserved: lookups are exact.
pub(crate) fn validate_email(email: &str) -> Result<String, RegistrationRequestError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(RegistrationRequestError::EmptyEmail);
    }

    if !EmailAddress::is_valid(email) {
        return Err(RegistrationRequestError::InvalidEmailFormat);
    }

    Ok(email.to_string())
}

fn required(field: &'static str, value: String) -> Result<String, RegistrationRequestError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistrationRequestError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

impl TryFrom<RegistrationBody> for RegistrationRequest {
    type Error = RegistrationRequestError;

    fn try_from(body: RegistrationBody) -> Result<Self, Self::Error> {
        RegistrationRequest::new(
            body.email,
            body.password,
            UserProfileFields {
                first_name: body.first_name,
                last_name: body.last_name,
                phone: body.phone,
                address: body.address,
                pincode: body.pincode,
            },
        )
    }
}

// ====================== Session Response ======================

/// Public user fields plus a bearer token. Shared by register and login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthSession {
    #[serde(flatten)]
    pub user: UserProfile,
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub token: String,
}

// ====================== Register Error ======================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("User already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ====================== Register User Use Case ======================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegistrationRequest) -> Result<AuthSession, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, request: RegistrationRequest) -> Result<AuthSession, RegisterUserError> {
        let existing = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: request.email().to_string(),
            password_hash,
            profile: request.profile().clone(),
            created_at: now,
            updated_at: now,
        };

        // The unique index still guards against a concurrent registration.
        let created = self
            .repository
            .create_user(user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
            })?;

        let token = self
            .token_provider
            .generate_access_token(created.id.value())
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        tracing::info!(user_id = %created.id, "User registered");

        Ok(AuthSession {
            user: UserProfile::from(&created),
            token,
        })
    }
}
