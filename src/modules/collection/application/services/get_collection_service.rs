use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::collection::application::domain::entities::CollectionDetail;
use crate::modules::collection::application::ports::incoming::use_cases::{
    GetCollectionError, GetCollectionUseCase,
};
use crate::modules::collection::application::ports::outgoing::CollectionQuery;

pub struct GetCollectionService<Q>
where
    Q: CollectionQuery,
{
    query: Q,
}

impl<Q> GetCollectionService<Q>
where
    Q: CollectionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCollectionUseCase for GetCollectionService<Q>
where
    Q: CollectionQuery + Send + Sync,
{
    async fn execute(
        &self,
        collection_id: Uuid,
        viewer: Option<Actor>,
    ) -> Result<CollectionDetail, GetCollectionError> {
        let detail = self
            .query
            .find_detail(collection_id)
            .await
            .map_err(|e| GetCollectionError::QueryError(e.to_string()))?
            .ok_or(GetCollectionError::NotFound)?;

        if !detail.collection.visibility().visible_to(viewer) {
            return Err(GetCollectionError::NotFound);
        }

        Ok(detail)
    }
}
