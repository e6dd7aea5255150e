use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::comments;
use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::collection::adapter::outgoing::sea_orm_entity::collections;
use crate::modules::engagement::application::domain::entities::{Comment, CommentOwnership};
use crate::modules::engagement::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError,
};
use crate::shared::db::is_foreign_key_violation;

const LIST_SQL: &str = r#"
    SELECT cm.id, cm.collection_id, cm.body, cm.created_at,
           u.id AS author_id, u.username, u.display_name, u.avatar_url
    FROM comments cm
    JOIN users u ON u.id = cm.user_id
    WHERE cm.collection_id = $1
    ORDER BY cm.created_at ASC, cm.id
"#;

const INSERT_SQL: &str = r#"
    WITH inserted AS (
        INSERT INTO comments (user_id, collection_id, body)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, collection_id, body, created_at
    )
    SELECT i.id, i.collection_id, i.body, i.created_at,
           u.id AS author_id, u.username, u.display_name, u.avatar_url
    FROM inserted i
    JOIN users u ON u.id = i.user_id
"#;

const OWNERSHIP_SQL: &str = r#"
    SELECT cm.id AS comment_id, cm.user_id AS author_id, c.owner_id AS collection_owner_id
    FROM comments cm
    JOIN collections c ON c.id = cm.collection_id
    WHERE cm.id = $1
"#;

#[derive(Debug, FromQueryResult)]
struct CommentRow {
    id: Uuid,
    collection_id: Uuid,
    body: String,
    created_at: DateTimeWithTimeZone,
    author_id: Uuid,
    username: String,
    display_name: Option<String>,
    avatar_url: Option<String>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            collection_id: row.collection_id,
            body: row.body,
            author: UserSummary {
                id: row.author_id,
                username: row.username,
                display_name: row.display_name,
                avatar_url: row.avatar_url,
            },
            created_at: row.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct OwnershipRow {
    comment_id: Uuid,
    author_id: Uuid,
    collection_owner_id: Uuid,
}

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn list_for_collection(
        &self,
        collection_id: Uuid,
    ) -> Result<Option<Vec<Comment>>, CommentRepositoryError> {
        let exists = collections::Entity::find_by_id(collection_id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let rows = CommentRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            LIST_SQL,
            [collection_id.into()],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(map_db_err)?;

        Ok(Some(rows.into_iter().map(Comment::from).collect()))
    }

    async fn create_comment(
        &self,
        author_id: Uuid,
        collection_id: Uuid,
        body: String,
    ) -> Result<Comment, CommentRepositoryError> {
        CommentRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            INSERT_SQL,
            [author_id.into(), collection_id.into(), body.into()],
        ))
        .one(self.db.as_ref())
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                CommentRepositoryError::CollectionNotFound
            } else {
                map_db_err(e)
            }
        })?
        .map(Comment::from)
        .ok_or_else(|| CommentRepositoryError::DatabaseError("insert returned no row".to_string()))
    }

    async fn find_ownership(
        &self,
        comment_id: Uuid,
    ) -> Result<Option<CommentOwnership>, CommentRepositoryError> {
        let row = OwnershipRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            OWNERSHIP_SQL,
            [comment_id.into()],
        ))
        .one(self.db.as_ref())
        .await
        .map_err(map_db_err)?;

        Ok(row.map(|r| CommentOwnership {
            comment_id: r.comment_id,
            author_id: r.author_id,
            collection_owner_id: r.collection_owner_id,
        }))
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        comments::Entity::delete_by_id(comment_id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::collection::adapter::outgoing::collection_repository_postgres::tests::mock_collection;
    use maplit::btreemap;
    use sea_orm::{MockDatabase, Value};
    use std::collections::BTreeMap;

    fn comment_row(collection_id: Uuid, body: &str) -> BTreeMap<&'static str, Value> {
        btreemap! {
            "id" => Value::Uuid(Some(Box::new(Uuid::new_v4()))),
            "collection_id" => Value::Uuid(Some(Box::new(collection_id))),
            "body" => Value::String(Some(Box::new(body.to_string()))),
            "created_at" => Value::ChronoDateTimeWithTimeZone(Some(Box::new(Utc::now().fixed_offset()))),
            "author_id" => Value::Uuid(Some(Box::new(Uuid::new_v4()))),
            "username" => Value::String(Some(Box::new("sam".to_string()))),
            "display_name" => Value::String(None),
            "avatar_url" => Value::String(None),
        }
    }

    #[tokio::test]
    async fn test_list_for_missing_collection_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<collections::Model>::new()])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));

        assert!(repo.list_for_collection(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_maps_author() {
        let collection_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_collection(collection_id, Uuid::new_v4())]])
            .append_query_results(vec![vec![
                comment_row(collection_id, "first"),
                comment_row(collection_id, "second"),
            ]])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));
        let comments = repo.list_for_collection(collection_id).await.unwrap().unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].body, "first");
        assert_eq!(comments[0].author.username, "sam");
    }

    #[tokio::test]
    async fn test_create_on_missing_collection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "violates foreign key constraint \"fk_comments_collection_id\"".to_string(),
            )])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_comment(Uuid::new_v4(), Uuid::new_v4(), "hi".to_string())
            .await;

        assert!(matches!(result, Err(CommentRepositoryError::CollectionNotFound)));
    }

    #[tokio::test]
    async fn test_find_ownership() {
        let (comment, author, owner) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "comment_id" => Value::Uuid(Some(Box::new(comment))),
                "author_id" => Value::Uuid(Some(Box::new(author))),
                "collection_owner_id" => Value::Uuid(Some(Box::new(owner))),
            }]])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));
        let ownership = repo.find_ownership(comment).await.unwrap().unwrap();

        assert_eq!(ownership.author_id, author);
        assert_eq!(ownership.collection_owner_id, owner);
    }
}
