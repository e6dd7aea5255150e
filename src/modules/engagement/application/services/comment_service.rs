use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::visibility::ensure_visible;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::engagement::application::domain::comment_body::normalize_comment_body;
use crate::modules::engagement::application::domain::entities::Comment;
use crate::modules::engagement::application::ports::incoming::use_cases::{
    AddCommentError, AddCommentUseCase, DeleteCommentError, DeleteCommentUseCase,
    ListCommentsError, ListCommentsUseCase,
};
use crate::modules::engagement::application::ports::outgoing::{
    CollectionVisibilityQuery, CommentRepository, CommentRepositoryError,
};

pub struct CommentService<R, V>
where
    R: CommentRepository,
    V: CollectionVisibilityQuery,
{
    repository: R,
    visibility: V,
}

impl<R, V> CommentService<R, V>
where
    R: CommentRepository,
    V: CollectionVisibilityQuery,
{
    pub fn new(repository: R, visibility: V) -> Self {
        Self {
            repository,
            visibility,
        }
    }
}

#[async_trait]
impl<R, V> ListCommentsUseCase for CommentService<R, V>
where
    R: CommentRepository + Send + Sync,
    V: CollectionVisibilityQuery + Send + Sync,
{
    async fn execute(
        &self,
        collection_id: Uuid,
        viewer: Option<Actor>,
    ) -> Result<Vec<Comment>, ListCommentsError> {
        ensure_visible(&self.visibility, collection_id, viewer).await?;

        self.repository
            .list_for_collection(collection_id)
            .await
            .map_err(|e| ListCommentsError::RepositoryError(e.to_string()))?
            .ok_or(ListCommentsError::NotFound)
    }
}

#[async_trait]
impl<R, V> AddCommentUseCase for CommentService<R, V>
where
    R: CommentRepository + Send + Sync,
    V: CollectionVisibilityQuery + Send + Sync,
{
    async fn execute(
        &self,
        author: Actor,
        collection_id: Uuid,
        body: &str,
    ) -> Result<Comment, AddCommentError> {
        let body =
            normalize_comment_body(body).map_err(|e| AddCommentError::InvalidBody(e.to_string()))?;
        ensure_visible(&self.visibility, collection_id, Some(author)).await?;

        self.repository
            .create_comment(author.id.value(), collection_id, body)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CollectionNotFound => AddCommentError::NotFound,
                CommentRepositoryError::DatabaseError(msg) => AddCommentError::RepositoryError(msg),
            })
    }
}

#[async_trait]
impl<R, V> DeleteCommentUseCase for CommentService<R, V>
where
    R: CommentRepository + Send + Sync,
    V: CollectionVisibilityQuery + Send + Sync,
{
    async fn execute(&self, actor: Actor, comment_id: Uuid) -> Result<(), DeleteCommentError> {
        let ownership = self
            .repository
            .find_ownership(comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCommentError::NotFound)?;

        let is_author = ownership.author_id == actor.id.value();
        if !is_author && !actor.can_manage(Some(ownership.collection_owner_id)) {
            return Err(DeleteCommentError::Forbidden);
        }

        self.repository
            .delete_comment(comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?;

        info!(comment_id = %comment_id, deleted_by = %actor.id, "Comment deleted");
        Ok(())
    }
}
