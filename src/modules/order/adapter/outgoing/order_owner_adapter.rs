use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::order::application::domain::OrderOwner;
use crate::modules::order::application::ports::outgoing::{
    OrderOwnerDirectory, OrderOwnerDirectoryError,
};

/// Resolves order owners through the auth module's user query.
#[derive(Clone)]
pub struct UserDirectoryAdapter<Q>
where
    Q: UserQuery,
{
    users: Q,
}

impl<Q> UserDirectoryAdapter<Q>
where
    Q: UserQuery,
{
    pub fn new(users: Q) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<Q> OrderOwnerDirectory for UserDirectoryAdapter<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn find_owner(
        &self,
        user_id: Uuid,
    ) -> Result<Option<OrderOwner>, OrderOwnerDirectoryError> {
        let user = self
            .users
            .find_by_id(UserId::from(user_id))
            .await
            .map_err(|e| OrderOwnerDirectoryError::LookupFailed(e.to_string()))?;

        Ok(user.map(|u| OrderOwner {
            id: u.id.value(),
            first_name: u.profile.first_name,
            last_name: u.profile.last_name,
            email: u.email,
        }))
    }
}
