use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LikeRepositoryError {
    #[error("Collection not found")]
    CollectionNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// No-op when the like already exists.
    async fn like(&self, user_id: Uuid, collection_id: Uuid) -> Result<(), LikeRepositoryError>;

    /// No-op when there was no like. Fails only for a missing collection.
    async fn unlike(&self, user_id: Uuid, collection_id: Uuid) -> Result<(), LikeRepositoryError>;

    async fn count_likes(&self, collection_id: Uuid) -> Result<u64, LikeRepositoryError>;
}
