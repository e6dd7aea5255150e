use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{clicks, collection_views};
use crate::modules::catalog::adapter::outgoing::sea_orm_entity::products;
use crate::modules::collection::adapter::outgoing::sea_orm_entity::collection_products;
use crate::modules::engagement::application::domain::entities::NewClick;
use crate::modules::engagement::application::ports::outgoing::{
    TelemetryRepository, TelemetryRepositoryError,
};
use crate::shared::db::is_foreign_key_violation;

#[derive(Clone, Debug)]
pub struct TelemetryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TelemetryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TelemetryRepository for TelemetryRepositoryPostgres {
    async fn record_view(
        &self,
        collection_id: Uuid,
        viewer_id: Option<Uuid>,
    ) -> Result<(), TelemetryRepositoryError> {
        let view = collection_views::ActiveModel {
            id: Set(Uuid::new_v4()),
            collection_id: Set(collection_id),
            user_id: Set(viewer_id),
            created_at: Set(Utc::now().fixed_offset()),
        };

        view.insert(self.db.as_ref()).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                TelemetryRepositoryError::CollectionNotFound
            } else {
                map_db_err(e)
            }
        })?;

        Ok(())
    }

    async fn product_source_url(
        &self,
        product_id: Uuid,
    ) -> Result<Option<String>, TelemetryRepositoryError> {
        let product = products::Entity::find_by_id(product_id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(product.map(|p| p.source_url))
    }

    async fn is_in_collection(
        &self,
        collection_id: Uuid,
        product_id: Uuid,
    ) -> Result<bool, TelemetryRepositoryError> {
        let link = collection_products::Entity::find_by_id((collection_id, product_id))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(link.is_some())
    }

    async fn record_click(&self, click: NewClick) -> Result<(), TelemetryRepositoryError> {
        let row = clicks::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(click.product_id),
            collection_id: Set(click.collection_id),
            user_id: Set(click.user_id),
            referrer: Set(click.referrer),
            created_at: Set(Utc::now().fixed_offset()),
        };

        row.insert(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> TelemetryRepositoryError {
    TelemetryRepositoryError::DatabaseError(e.to_string())
}
