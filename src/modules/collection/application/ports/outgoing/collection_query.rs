use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::collection::application::domain::entities::{
    CollectionCard, CollectionDetail, FeedSort,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CollectionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Read side of collections: detail pages and listings with counts.
#[async_trait]
pub trait CollectionQuery: Send + Sync {
    async fn find_detail(
        &self,
        collection_id: Uuid,
    ) -> Result<Option<CollectionDetail>, CollectionQueryError>;

    async fn list_published(
        &self,
        sort: FeedSort,
        page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, CollectionQueryError>;

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        include_unpublished: bool,
        page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, CollectionQueryError>;
}
