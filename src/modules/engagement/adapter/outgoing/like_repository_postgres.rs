use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::user_likes;
use crate::modules::collection::adapter::outgoing::sea_orm_entity::collections;
use crate::modules::engagement::application::ports::outgoing::{
    LikeRepository, LikeRepositoryError,
};
use crate::shared::db::is_foreign_key_violation;

const INSERT_LIKE_SQL: &str = r#"
    INSERT INTO user_likes (user_id, collection_id)
    VALUES ($1, $2)
    ON CONFLICT DO NOTHING
"#;

#[derive(Clone, Debug)]
pub struct LikeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LikeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LikeRepository for LikeRepositoryPostgres {
    async fn like(&self, user_id: Uuid, collection_id: Uuid) -> Result<(), LikeRepositoryError> {
        self.db
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                INSERT_LIKE_SQL,
                [user_id.into(), collection_id.into()],
            ))
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    LikeRepositoryError::CollectionNotFound
                } else {
                    map_db_err(e)
                }
            })?;

        Ok(())
    }

    async fn unlike(&self, user_id: Uuid, collection_id: Uuid) -> Result<(), LikeRepositoryError> {
        collections::Entity::find_by_id(collection_id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?
            .ok_or(LikeRepositoryError::CollectionNotFound)?;

        user_likes::Entity::delete_many()
            .filter(user_likes::Column::UserId.eq(user_id))
            .filter(user_likes::Column::CollectionId.eq(collection_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn count_likes(&self, collection_id: Uuid) -> Result<u64, LikeRepositoryError> {
        user_likes::Entity::find()
            .filter(user_likes::Column::CollectionId.eq(collection_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> LikeRepositoryError {
    LikeRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::collection::adapter::outgoing::collection_repository_postgres::tests::mock_collection;
    use maplit::btreemap;
    use sea_orm::{MockDatabase, MockExecResult, Value};

    #[tokio::test]
    async fn test_like_unknown_collection_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom(
                "insert or update on table \"user_likes\" violates foreign key constraint \"fk_user_likes_collection_id\"".to_string(),
            )])
            .into_connection();

        let repo = LikeRepositoryPostgres::new(Arc::new(db));
        let result = repo.like(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(LikeRepositoryError::CollectionNotFound)));
    }

    #[tokio::test]
    async fn test_unlike_checks_collection_then_deletes() {
        let collection_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_collection(collection_id, Uuid::new_v4())]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = LikeRepositoryPostgres::new(Arc::new(db));

        assert!(repo.unlike(Uuid::new_v4(), collection_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_unlike_missing_collection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<collections::Model>::new()])
            .into_connection();

        let repo = LikeRepositoryPostgres::new(Arc::new(db));
        let result = repo.unlike(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(LikeRepositoryError::CollectionNotFound)));
    }

    #[tokio::test]
    async fn test_count_likes() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "num_items" => Value::BigInt(Some(7)),
            }]])
            .into_connection();

        let repo = LikeRepositoryPostgres::new(Arc::new(db));

        assert_eq!(repo.count_likes(Uuid::new_v4()).await.unwrap(), 7);
    }
}
