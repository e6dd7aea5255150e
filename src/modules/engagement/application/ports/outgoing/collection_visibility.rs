use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::collection::application::domain::entities::CollectionVisibility;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VisibilityQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Lets engagement routes treat a draft like a missing collection for
/// anyone but its owner.
#[async_trait]
pub trait CollectionVisibilityQuery: Send + Sync {
    async fn find_visibility(
        &self,
        collection_id: Uuid,
    ) -> Result<Option<CollectionVisibility>, VisibilityQueryError>;
}
