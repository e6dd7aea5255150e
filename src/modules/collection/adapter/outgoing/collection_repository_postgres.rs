use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::sea_orm_entity::collection_products;
use super::sea_orm_entity::collections::{self, ActiveModel, Entity};
use crate::modules::collection::application::domain::entities::Collection;
use crate::modules::collection::application::domain::ordering::insert_position;
use crate::modules::collection::application::ports::outgoing::{
    CollectionRepository, CollectionRepositoryError, CreateCollectionData, UpdateCollectionData,
};
use crate::shared::db::{is_foreign_key_violation, is_unique_violation};
use crate::shared::patch::PatchField;

/// Item writes serialize on the parent row so concurrent edits never see
/// stale positions.
const LOCK_COLLECTION_SQL: &str = r#"
    SELECT id FROM collections
    WHERE id = $1
    FOR UPDATE
"#;

const INSERT_ITEM_SQL: &str = r#"
    INSERT INTO collection_products (collection_id, product_id, position)
    VALUES ($1, $2, $3)
"#;

const SHIFT_DOWN_SQL: &str = r#"
    UPDATE collection_products
    SET position = position + 1
    WHERE collection_id = $1 AND position >= $2
"#;

const DELETE_ITEM_SQL: &str = r#"
    DELETE FROM collection_products
    WHERE collection_id = $1 AND product_id = $2
    RETURNING position
"#;

const CLOSE_GAP_SQL: &str = r#"
    UPDATE collection_products
    SET position = position - 1
    WHERE collection_id = $1 AND position > $2
"#;

const SET_POSITION_SQL: &str = r#"
    UPDATE collection_products
    SET position = $3
    WHERE collection_id = $1 AND product_id = $2
"#;

#[derive(Clone, Debug)]
pub struct CollectionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CollectionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn insert_item_stmt(collection_id: Uuid, product_id: Uuid, position: i32) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            INSERT_ITEM_SQL,
            [collection_id.into(), product_id.into(), position.into()],
        )
    }

    async fn lock_collection(
        txn: &DatabaseTransaction,
        collection_id: Uuid,
    ) -> Result<(), CollectionRepositoryError> {
        txn.query_one(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            LOCK_COLLECTION_SQL,
            [collection_id.into()],
        ))
        .await
        .map_err(map_db_err)?
        .map(|_| ())
        .ok_or(CollectionRepositoryError::NotFound)
    }

    async fn insert_with_items(
        txn: &DatabaseTransaction,
        data: CreateCollectionData,
    ) -> Result<collections::Model, CollectionRepositoryError> {
        let now = Utc::now().fixed_offset();
        let collection_id = Uuid::new_v4();

        let model = ActiveModel {
            id: Set(collection_id),
            owner_id: Set(data.owner_id),
            title: Set(data.title),
            description: Set(data.description),
            cover_image_url: Set(data.cover_image_url),
            is_published: Set(data.is_published),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(txn).await.map_err(map_db_err)?;

        for (product_id, position) in data.product_ids.into_iter().zip(0..) {
            txn.execute(Self::insert_item_stmt(collection_id, product_id, position))
                .await
                .map_err(map_item_err)?;
        }

        Ok(inserted)
    }

    async fn add_item_tx(
        txn: &DatabaseTransaction,
        collection_id: Uuid,
        product_id: Uuid,
        position: Option<i32>,
    ) -> Result<i32, CollectionRepositoryError> {
        Self::lock_collection(txn, collection_id).await?;

        let len = collection_products::Entity::find()
            .filter(collection_products::Column::CollectionId.eq(collection_id))
            .count(txn)
            .await
            .map_err(map_db_err)?;

        let at = insert_position(len as usize, position);

        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            SHIFT_DOWN_SQL,
            [collection_id.into(), at.into()],
        ))
        .await
        .map_err(map_db_err)?;

        txn.execute(Self::insert_item_stmt(collection_id, product_id, at))
            .await
            .map_err(map_item_err)?;

        Ok(at)
    }

    async fn remove_item_tx(
        txn: &DatabaseTransaction,
        collection_id: Uuid,
        product_id: Uuid,
    ) -> Result<bool, CollectionRepositoryError> {
        Self::lock_collection(txn, collection_id).await?;

        let Some(row) = txn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                DELETE_ITEM_SQL,
                [collection_id.into(), product_id.into()],
            ))
            .await
            .map_err(map_db_err)?
        else {
            return Ok(false);
        };

        let removed_at: i32 = row.try_get("", "position").map_err(map_db_err)?;

        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            CLOSE_GAP_SQL,
            [collection_id.into(), removed_at.into()],
        ))
        .await
        .map_err(map_db_err)?;

        Ok(true)
    }

    async fn reorder_tx(
        txn: &DatabaseTransaction,
        collection_id: Uuid,
        product_ids: &[Uuid],
    ) -> Result<(), CollectionRepositoryError> {
        Self::lock_collection(txn, collection_id).await?;

        for (product_id, position) in product_ids.iter().zip(0i32..) {
            let result = txn
                .execute(Statement::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    SET_POSITION_SQL,
                    [collection_id.into(), (*product_id).into(), position.into()],
                ))
                .await
                .map_err(map_db_err)?;

            if result.rows_affected() != 1 {
                return Err(CollectionRepositoryError::DatabaseError(format!(
                    "product {product_id} left the collection during reorder"
                )));
            }
        }

        Ok(())
    }

    /// Commits on success and rolls back on error.
    async fn finish<T>(
        txn: DatabaseTransaction,
        result: Result<T, CollectionRepositoryError>,
    ) -> Result<T, CollectionRepositoryError> {
        match result {
            Ok(value) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(value)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}

#[async_trait]
impl CollectionRepository for CollectionRepositoryPostgres {
    async fn create_collection(
        &self,
        data: CreateCollectionData,
    ) -> Result<Collection, CollectionRepositoryError> {
        let owner_id = data.owner_id;
        let item_count = data.product_ids.len();

        let txn = self.db.begin().await.map_err(map_db_err)?;
        let result = Self::insert_with_items(&txn, data).await;
        let model = Self::finish(txn, result).await?;

        info!(
            collection_id = %model.id,
            owner_id = %owner_id,
            items = item_count,
            "Collection created"
        );

        Ok(to_collection(model))
    }

    async fn find_owner(
        &self,
        collection_id: Uuid,
    ) -> Result<Option<Uuid>, CollectionRepositoryError> {
        let model = Entity::find_by_id(collection_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.owner_id))
    }

    async fn update_collection(
        &self,
        collection_id: Uuid,
        data: UpdateCollectionData,
    ) -> Result<Collection, CollectionRepositoryError> {
        if data.is_empty() {
            return Entity::find_by_id(collection_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(to_collection)
                .ok_or(CollectionRepositoryError::NotFound);
        }

        let model = ActiveModel {
            id: Unchanged(collection_id),
            title: data.title.map(Set).unwrap_or(NotSet),
            description: patch_to_active(data.description),
            cover_image_url: patch_to_active(data.cover_image_url),
            is_published: data.is_published.map(Set).unwrap_or(NotSet),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => CollectionRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(to_collection(updated))
    }

    async fn delete_collection(&self, collection_id: Uuid) -> Result<(), CollectionRepositoryError> {
        let result = Entity::delete_by_id(collection_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CollectionRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn item_ids(&self, collection_id: Uuid) -> Result<Vec<Uuid>, CollectionRepositoryError> {
        let rows = collection_products::Entity::find()
            .filter(collection_products::Column::CollectionId.eq(collection_id))
            .order_by_asc(collection_products::Column::Position)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|row| row.product_id).collect())
    }

    async fn add_item(
        &self,
        collection_id: Uuid,
        product_id: Uuid,
        position: Option<i32>,
    ) -> Result<i32, CollectionRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let result = Self::add_item_tx(&txn, collection_id, product_id, position).await;
        Self::finish(txn, result).await
    }

    async fn remove_item(
        &self,
        collection_id: Uuid,
        product_id: Uuid,
    ) -> Result<bool, CollectionRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let result = Self::remove_item_tx(&txn, collection_id, product_id).await;
        Self::finish(txn, result).await
    }

    async fn reorder_items(
        &self,
        collection_id: Uuid,
        product_ids: &[Uuid],
    ) -> Result<(), CollectionRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let result = Self::reorder_tx(&txn, collection_id, product_ids).await;
        Self::finish(txn, result).await
    }
}

fn patch_to_active(field: PatchField<String>) -> sea_orm::ActiveValue<Option<String>> {
    match field {
        PatchField::Unset => NotSet,
        PatchField::Null => Set(None),
        PatchField::Value(v) => Set(Some(v)),
    }
}

pub(crate) fn to_collection(model: collections::Model) -> Collection {
    Collection {
        id: model.id,
        owner_id: model.owner_id,
        title: model.title,
        description: model.description,
        cover_image_url: model.cover_image_url,
        is_published: model.is_published,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn map_item_err(e: DbErr) -> CollectionRepositoryError {
    if is_unique_violation(&e) {
        return CollectionRepositoryError::AlreadyInCollection;
    }
    if is_foreign_key_violation(&e) {
        return if e.to_string().contains("fk_collection_products_collection_id") {
            CollectionRepositoryError::NotFound
        } else {
            CollectionRepositoryError::ProductNotFound
        };
    }
    map_db_err(e)
}

fn map_db_err(e: DbErr) -> CollectionRepositoryError {
    CollectionRepositoryError::DatabaseError(e.to_string())
}
