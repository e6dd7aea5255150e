use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{UserId, UserProfile};

#[derive(Debug, Clone)]
pub enum ProfileLookup {
    Id(UserId),
    Username(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetUserProfileUseCase: Send + Sync {
    async fn execute(&self, lookup: ProfileLookup) -> Result<UserProfile, GetUserProfileError>;
}
