use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Could not hash password: {0}")]
    Hash(String),

    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Hashing worker did not complete")]
    Worker,
}

/// One-way password hashing. Implementations run the slow work off the async
/// executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Returns a self-describing hash string (PHC format for Argon2).
    async fn hash(&self, plain: &str) -> Result<String, HashError>;

    /// `Ok(false)` means a wrong password; `Err` means the stored hash
    /// could not be checked at all.
    async fn matches(&self, plain: &str, stored: &str) -> Result<bool, HashError>;
}
