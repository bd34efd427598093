use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserProfile},
    ports::outgoing::{user_query::UserQueryError, UserQuery},
};

#[derive(Debug, thiserror::Error, Clone)]
pub enum FetchUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait FetchUserProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchUserError>;
}

#[derive(Debug, Clone)]
pub struct FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchUserError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(FetchUserError::UserNotFound)?;

        Ok(UserProfile::from(&user))
    }
}
