use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::domain::entities::{PublicUser, UserRole};

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Option<UserRole>,
}

/// Returned by both register and login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthOutput {
    pub user: PublicUser,
    pub access_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Role {0} cannot be self-assigned")]
    RoleNotAllowed(UserRole),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<AuthOutput, RegisterUserError>;
}
