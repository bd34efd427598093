use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, SqlErr};
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::{User, UserProfileFields};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id.into(),
            email: model.email,
            password_hash: model.password_hash,
            profile: UserProfileFields {
                first_name: model.first_name,
                last_name: model.last_name,
                phone: model.phone,
                address: model.address,
                pincode: model.pincode,
            },
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

/// Unique violation on insert. Falls back to message inspection for drivers
/// (and mocks) that do not surface a structured SQL error.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return true;
    }
    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user.id.value()),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            first_name: Set(user.profile.first_name),
            last_name: Set(user.profile.last_name),
            phone: Set(user.profile.phone),
            address: Set(user.profile.address),
            pincode: Set(user.profile.pincode),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_user(inserted))
    }
}
