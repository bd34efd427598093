use async_trait::async_trait;

/// Failures of the one-way credential hash. Messages never include the password.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Could not hash password")]
    HashFailed,

    #[error("Could not verify password against stored hash")]
    VerifyFailed,

    #[error("Hashing worker did not complete")]
    TaskFailed,
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produces a self-describing hash (algorithm, params and salt included).
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on mismatch. `Err` only when the stored hash is unusable.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
