use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::collection::application::domain::entities::CollectionDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCollectionError {
    /// Also returned for an unpublished collection seen by someone else.
    #[error("Collection not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCollectionUseCase: Send + Sync {
    async fn execute(
        &self,
        collection_id: Uuid,
        viewer: Option<Actor>,
    ) -> Result<CollectionDetail, GetCollectionError>;
}
