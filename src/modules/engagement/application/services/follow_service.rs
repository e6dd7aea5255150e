use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::{UserId, UserSummary};
use crate::modules::engagement::application::domain::entities::{FollowDirection, FollowStatus};
use crate::modules::engagement::application::ports::incoming::use_cases::{
    FollowUserError, FollowUserUseCase, ListFollowsError, ListFollowsUseCase, UnfollowUserUseCase,
};
use crate::modules::engagement::application::ports::outgoing::{
    FollowRepository, FollowRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct FollowService<R>
where
    R: FollowRepository,
{
    repository: R,
}

impl<R> FollowService<R>
where
    R: FollowRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_err(e: FollowRepositoryError) -> FollowUserError {
    match e {
        FollowRepositoryError::UserNotFound => FollowUserError::NotFound,
        FollowRepositoryError::DatabaseError(msg) => FollowUserError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> FollowUserUseCase for FollowService<R>
where
    R: FollowRepository + Send + Sync,
{
    async fn execute(
        &self,
        follower: UserId,
        target: UserId,
    ) -> Result<FollowStatus, FollowUserError> {
        if follower == target {
            return Err(FollowUserError::SelfFollow);
        }

        self.repository
            .follow(follower.value(), target.value())
            .await
            .map_err(map_err)?;

        info!(follower_id = %follower, following_id = %target, "Follow recorded");

        Ok(FollowStatus {
            user_id: target.value(),
            following: true,
        })
    }
}

#[async_trait]
impl<R> UnfollowUserUseCase for FollowService<R>
where
    R: FollowRepository + Send + Sync,
{
    async fn execute(
        &self,
        follower: UserId,
        target: UserId,
    ) -> Result<FollowStatus, FollowUserError> {
        if follower == target {
            return Err(FollowUserError::SelfFollow);
        }

        self.repository
            .unfollow(follower.value(), target.value())
            .await
            .map_err(map_err)?;

        Ok(FollowStatus {
            user_id: target.value(),
            following: false,
        })
    }
}

#[async_trait]
impl<R> ListFollowsUseCase for FollowService<R>
where
    R: FollowRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        direction: FollowDirection,
        page: PageRequest,
    ) -> Result<PageResult<UserSummary>, ListFollowsError> {
        self.repository
            .list(user.value(), direction, page)
            .await
            .map_err(|e| ListFollowsError::RepositoryError(e.to_string()))
    }
}
