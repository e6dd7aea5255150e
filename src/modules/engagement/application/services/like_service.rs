use async_trait::async_trait;
use uuid::Uuid;

use super::visibility::ensure_visible;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::engagement::application::domain::entities::LikeStatus;
use crate::modules::engagement::application::ports::incoming::use_cases::{
    LikeCollectionError, LikeCollectionUseCase, UnlikeCollectionUseCase,
};
use crate::modules::engagement::application::ports::outgoing::{
    CollectionVisibilityQuery, LikeRepository, LikeRepositoryError,
};

/// Backs both like and unlike.
pub struct LikeService<R, V>
where
    R: LikeRepository,
    V: CollectionVisibilityQuery,
{
    repository: R,
    visibility: V,
}

impl<R, V> LikeService<R, V>
where
    R: LikeRepository,
    V: CollectionVisibilityQuery,
{
    pub fn new(repository: R, visibility: V) -> Self {
        Self {
            repository,
            visibility,
        }
    }

    async fn status(
        &self,
        collection_id: Uuid,
        liked: bool,
    ) -> Result<LikeStatus, LikeCollectionError> {
        let like_count = self
            .repository
            .count_likes(collection_id)
            .await
            .map_err(map_err)?;

        Ok(LikeStatus {
            collection_id,
            liked,
            like_count,
        })
    }
}

fn map_err(e: LikeRepositoryError) -> LikeCollectionError {
    match e {
        LikeRepositoryError::CollectionNotFound => LikeCollectionError::NotFound,
        LikeRepositoryError::DatabaseError(msg) => LikeCollectionError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R, V> LikeCollectionUseCase for LikeService<R, V>
where
    R: LikeRepository + Send + Sync,
    V: CollectionVisibilityQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
    ) -> Result<LikeStatus, LikeCollectionError> {
        ensure_visible(&self.visibility, collection_id, Some(actor)).await?;

        self.repository
            .like(actor.id.value(), collection_id)
            .await
            .map_err(map_err)?;

        self.status(collection_id, true).await
    }
}

#[async_trait]
impl<R, V> UnlikeCollectionUseCase for LikeService<R, V>
where
    R: LikeRepository + Send + Sync,
    V: CollectionVisibilityQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
    ) -> Result<LikeStatus, LikeCollectionError> {
        ensure_visible(&self.visibility, collection_id, Some(actor)).await?;

        self.repository
            .unlike(actor.id.value(), collection_id)
            .await
            .map_err(map_err)?;

        self.status(collection_id, false).await
    }
}
