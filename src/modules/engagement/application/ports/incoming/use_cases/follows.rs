use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{UserId, UserSummary};
use crate::modules::engagement::application::domain::entities::{FollowDirection, FollowStatus};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowUserError {
    #[error("You cannot follow yourself")]
    SelfFollow,

    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FollowUserUseCase: Send + Sync {
    async fn execute(&self, follower: UserId, target: UserId)
        -> Result<FollowStatus, FollowUserError>;
}

#[async_trait]
pub trait UnfollowUserUseCase: Send + Sync {
    async fn execute(&self, follower: UserId, target: UserId)
        -> Result<FollowStatus, FollowUserError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListFollowsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListFollowsUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        direction: FollowDirection,
        page: PageRequest,
    ) -> Result<PageResult<UserSummary>, ListFollowsError>;
}
