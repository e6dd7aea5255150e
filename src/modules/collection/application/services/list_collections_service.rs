use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::collection::application::domain::entities::{CollectionCard, FeedSort};
use crate::modules::collection::application::ports::incoming::use_cases::{
    ListCollectionsError, ListFeedUseCase, ListUserCollectionsUseCase,
};
use crate::modules::collection::application::ports::outgoing::CollectionQuery;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListFeedService<Q>
where
    Q: CollectionQuery,
{
    query: Q,
}

impl<Q> ListFeedService<Q>
where
    Q: CollectionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListFeedUseCase for ListFeedService<Q>
where
    Q: CollectionQuery + Send + Sync,
{
    async fn execute(
        &self,
        sort: FeedSort,
        page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, ListCollectionsError> {
        self.query
            .list_published(sort, page)
            .await
            .map_err(|e| ListCollectionsError::QueryError(e.to_string()))
    }
}

pub struct ListUserCollectionsService<Q>
where
    Q: CollectionQuery,
{
    query: Q,
}

impl<Q> ListUserCollectionsService<Q>
where
    Q: CollectionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUserCollectionsUseCase for ListUserCollectionsService<Q>
where
    Q: CollectionQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        viewer: Option<UserId>,
        page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, ListCollectionsError> {
        let include_unpublished = viewer == Some(owner);

        self.query
            .list_by_owner(owner.value(), include_unpublished, page)
            .await
            .map_err(|e| ListCollectionsError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::modules::collection::application::services::test_doubles::MockCollectionQuery;

    #[tokio::test]
    async fn test_feed_passes_sort_through() {
        let service = ListFeedService::new(MockCollectionQuery::default());

        service
            .execute(FeedSort::Popular, PageRequest::default())
            .await
            .unwrap();

        assert_eq!(*service.query.sort.lock().unwrap(), Some(FeedSort::Popular));
    }

    #[tokio::test]
    async fn test_drafts_included_only_for_owner() {
        let owner = UserId::from(Uuid::new_v4());
        let own = ListUserCollectionsService::new(MockCollectionQuery::default());
        let other = ListUserCollectionsService::new(MockCollectionQuery::default());

        own.execute(owner, Some(owner), PageRequest::default())
            .await
            .unwrap();
        other
            .execute(owner, None, PageRequest::default())
            .await
            .unwrap();

        assert_eq!(*own.query.include_unpublished.lock().unwrap(), Some(true));
        assert_eq!(*other.query.include_unpublished.lock().unwrap(), Some(false));
    }
}
