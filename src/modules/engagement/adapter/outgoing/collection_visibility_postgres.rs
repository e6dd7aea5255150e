use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::collection::adapter::outgoing::sea_orm_entity::collections;
use crate::modules::collection::application::domain::entities::CollectionVisibility;
use crate::modules::engagement::application::ports::outgoing::{
    CollectionVisibilityQuery, VisibilityQueryError,
};

#[derive(Clone, Debug)]
pub struct CollectionVisibilityPostgres {
    db: Arc<DatabaseConnection>,
}

impl CollectionVisibilityPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionVisibilityQuery for CollectionVisibilityPostgres {
    async fn find_visibility(
        &self,
        collection_id: Uuid,
    ) -> Result<Option<CollectionVisibility>, VisibilityQueryError> {
        let collection = collections::Entity::find_by_id(collection_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| VisibilityQueryError::DatabaseError(e.to_string()))?;

        Ok(collection.map(|c| CollectionVisibility {
            owner_id: c.owner_id,
            is_published: c.is_published,
        }))
    }
}
