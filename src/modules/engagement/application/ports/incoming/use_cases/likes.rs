use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::engagement::application::domain::entities::LikeStatus;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LikeCollectionError {
    #[error("Collection not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Idempotent; returns the like count after the change. Drafts count as
/// missing for everyone but their owner.
#[async_trait]
pub trait LikeCollectionUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
    ) -> Result<LikeStatus, LikeCollectionError>;
}

#[async_trait]
pub trait UnlikeCollectionUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
    ) -> Result<LikeStatus, LikeCollectionError>;
}
