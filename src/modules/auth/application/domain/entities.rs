use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Opaque user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact and delivery details captured at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfileFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub pincode: String,
}

/// Persisted user. Carries the password hash and is never serialized.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub profile: UserProfileFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a [`User`]: everything but the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    #[schema(value_type = String, example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: UserId,
    #[schema(example = "test@grocify.com")]
    pub email: String,
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
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.profile.first_name.clone(),
            last_name: user.profile.last_name.clone(),
            phone: user.profile.phone.clone(),
            address: user.profile.address.clone(),
            pincode: user.profile.pincode.clone(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new(),
            email: "test@grocify.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            profile: UserProfileFields {
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                phone: "9876543210".to_string(),
                address: "123 Test Street".to_string(),
                pincode: "123456".to_string(),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_id_roundtrips_through_uuid() {
        let raw = Uuid::new_v4();
        let id = UserId::from(raw);
        assert_eq!(Uuid::from(id), raw);
        assert_eq!(id.to_string(), raw.to_string());
    }

    #[test]
    fn test_profile_serialization_never_contains_password() {
        let user = sample_user();
        let json = serde_json::to_value(UserProfile::from(&user)).unwrap();

        assert_eq!(json["_id"], user.id.to_string());
        assert_eq!(json["firstName"], "Test");
        assert_eq!(json["pincode"], "123456");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert!(!json.to_string().contains("argon2"));
    }
}
