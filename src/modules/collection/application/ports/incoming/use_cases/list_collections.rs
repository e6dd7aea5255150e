use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::collection::application::domain::entities::{CollectionCard, FeedSort};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCollectionsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Public feed of published collections.
#[async_trait]
pub trait ListFeedUseCase: Send + Sync {
    async fn execute(
        &self,
        sort: FeedSort,
        page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, ListCollectionsError>;
}

/// A user's collections; drafts are included only for the owner.
#[async_trait]
pub trait ListUserCollectionsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        viewer: Option<UserId>,
        page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, ListCollectionsError>;
}
