use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{PublicUser, UserId};
use crate::modules::auth::application::ports::outgoing::UpdateProfileData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        data: UpdateProfileData,
    ) -> Result<PublicUser, UpdateProfileError>;
}
