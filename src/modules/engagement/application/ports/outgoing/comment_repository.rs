use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::engagement::application::domain::entities::{Comment, CommentOwnership};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Collection not found")]
    CollectionNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Oldest first. `None` when the collection does not exist.
    async fn list_for_collection(
        &self,
        collection_id: Uuid,
    ) -> Result<Option<Vec<Comment>>, CommentRepositoryError>;

    async fn create_comment(
        &self,
        author_id: Uuid,
        collection_id: Uuid,
        body: String,
    ) -> Result<Comment, CommentRepositoryError>;

    async fn find_ownership(
        &self,
        comment_id: Uuid,
    ) -> Result<Option<CommentOwnership>, CommentRepositoryError>;

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;
}
