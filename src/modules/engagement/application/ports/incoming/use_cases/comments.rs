use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::engagement::application::domain::entities::Comment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCommentsError {
    #[error("Collection not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListCommentsUseCase: Send + Sync {
    async fn execute(
        &self,
        collection_id: Uuid,
        viewer: Option<Actor>,
    ) -> Result<Vec<Comment>, ListCommentsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddCommentError {
    #[error("{0}")]
    InvalidBody(String),

    #[error("Collection not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        author: Actor,
        collection_id: Uuid,
        body: &str,
    ) -> Result<Comment, AddCommentError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Only the author or the collection owner can delete this comment")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, comment_id: Uuid) -> Result<(), DeleteCommentError>;
}
