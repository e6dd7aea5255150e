use async_trait::async_trait;

use super::AuthOutput;

#[derive(Debug, Clone)]
pub struct LoginUserInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginUserError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, input: LoginUserInput) -> Result<AuthOutput, LoginUserError>;
}
