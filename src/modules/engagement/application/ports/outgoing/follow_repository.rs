use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::engagement::application::domain::entities::FollowDirection;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// No-op when already following.
    async fn follow(&self, follower_id: Uuid, following_id: Uuid)
        -> Result<(), FollowRepositoryError>;

    async fn unfollow(
        &self,
        follower_id: Uuid,
        following_id: Uuid,
    ) -> Result<(), FollowRepositoryError>;

    /// Newest relationship first.
    async fn list(
        &self,
        user_id: Uuid,
        direction: FollowDirection,
        page: PageRequest,
    ) -> Result<PageResult<UserSummary>, FollowRepositoryError>;
}
