use async_trait::async_trait;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, Statement, Value,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::catalog::adapter::outgoing::product_repository_postgres::model_to_product;
use crate::modules::catalog::adapter::outgoing::sea_orm_entity::products;
use crate::modules::catalog::application::domain::entities::Product;
use crate::modules::search::application::domain::entities::CollectionHit;
use crate::modules::search::application::domain::query::{SearchQuery, SearchTier};
use crate::modules::search::application::ports::outgoing::{
    SearchRepository, SearchRepositoryError,
};

// The tsvector expressions must stay identical to the GIN indexes in the
// search index migration.

const PRODUCTS_RANKED_SQL: &str = r#"
    SELECT * FROM products
    WHERE to_tsvector('simple', name || ' ' || coalesce(description, ''))
          @@ plainto_tsquery('simple', $1)
    ORDER BY ts_rank(
        to_tsvector('simple', name || ' ' || coalesce(description, '')),
        plainto_tsquery('simple', $1)
    ) DESC, created_at DESC
    LIMIT $2
"#;

const PRODUCTS_FUZZY_SQL: &str = r#"
    SELECT * FROM products
    WHERE name ILIKE $2 OR similarity(name, $1) > 0.2
    ORDER BY similarity(name, $1) DESC, created_at DESC
    LIMIT $3
"#;

const COLLECTIONS_RANKED_SQL: &str = r#"
    SELECT c.id, c.title, c.description, c.cover_image_url,
           u.id AS owner_id, u.username, u.display_name, u.avatar_url
    FROM collections c
    JOIN users u ON u.id = c.owner_id
    WHERE c.is_published = true
      AND to_tsvector('simple', c.title || ' ' || coalesce(c.description, ''))
          @@ plainto_tsquery('simple', $1)
    ORDER BY ts_rank(
        to_tsvector('simple', c.title || ' ' || coalesce(c.description, '')),
        plainto_tsquery('simple', $1)
    ) DESC, c.created_at DESC
    LIMIT $2
"#;

const COLLECTIONS_FUZZY_SQL: &str = r#"
    SELECT c.id, c.title, c.description, c.cover_image_url,
           u.id AS owner_id, u.username, u.display_name, u.avatar_url
    FROM collections c
    JOIN users u ON u.id = c.owner_id
    WHERE c.is_published = true
      AND (c.title ILIKE $2 OR similarity(c.title, $1) > 0.2)
    ORDER BY similarity(c.title, $1) DESC, c.created_at DESC
    LIMIT $3
"#;

const USERS_RANKED_SQL: &str = r#"
    SELECT id, username, display_name, avatar_url
    FROM users
    WHERE to_tsvector('simple', username || ' ' || coalesce(display_name, ''))
          @@ plainto_tsquery('simple', $1)
    ORDER BY ts_rank(
        to_tsvector('simple', username || ' ' || coalesce(display_name, '')),
        plainto_tsquery('simple', $1)
    ) DESC, username
    LIMIT $2
"#;

const USERS_FUZZY_SQL: &str = r#"
    SELECT id, username, display_name, avatar_url
    FROM users
    WHERE username ILIKE $2 OR display_name ILIKE $2 OR similarity(username, $1) > 0.2
    ORDER BY similarity(username, $1) DESC, username
    LIMIT $3
"#;

#[derive(Debug, FromQueryResult)]
struct CollectionHitRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    cover_image_url: Option<String>,
    owner_id: Uuid,
    username: String,
    display_name: Option<String>,
    avatar_url: Option<String>,
}

impl From<CollectionHitRow> for CollectionHit {
    fn from(row: CollectionHitRow) -> Self {
        CollectionHit {
            id: row.id,
            title: row.title,
            description: row.description,
            cover_image_url: row.cover_image_url,
            owner: UserSummary {
                id: row.owner_id,
                username: row.username,
                display_name: row.display_name,
                avatar_url: row.avatar_url,
            },
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct UserHitRow {
    id: Uuid,
    username: String,
    display_name: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct SearchRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SearchRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Picks the SQL for `tier` and binds its parameters.
    fn statement(query: &SearchQuery, tier: SearchTier, ranked: &str, fuzzy: &str) -> Statement {
        let limit = Value::from(query.limit() as i64);
        let (sql, values): (&str, Vec<Value>) = match tier {
            SearchTier::Ranked => (ranked, vec![query.text().into(), limit]),
            SearchTier::Fuzzy => (
                fuzzy,
                vec![query.text().into(), query.like_pattern().into(), limit],
            ),
        };
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
    }
}

#[async_trait]
impl SearchRepository for SearchRepositoryPostgres {
    async fn products(
        &self,
        query: &SearchQuery,
        tier: SearchTier,
    ) -> Result<Vec<Product>, SearchRepositoryError> {
        let models = products::Entity::find()
            .from_raw_sql(Self::statement(
                query,
                tier,
                PRODUCTS_RANKED_SQL,
                PRODUCTS_FUZZY_SQL,
            ))
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(|m| {
                model_to_product(m).map_err(|e| SearchRepositoryError::DatabaseError(e.to_string()))
            })
            .collect()
    }

    async fn collections(
        &self,
        query: &SearchQuery,
        tier: SearchTier,
    ) -> Result<Vec<CollectionHit>, SearchRepositoryError> {
        let rows = CollectionHitRow::find_by_statement(Self::statement(
            query,
            tier,
            COLLECTIONS_RANKED_SQL,
            COLLECTIONS_FUZZY_SQL,
        ))
        .all(self.db.as_ref())
        .await
        .map_err(map_db_err)?;

        Ok(rows.into_iter().map(CollectionHit::from).collect())
    }

    async fn users(
        &self,
        query: &SearchQuery,
        tier: SearchTier,
    ) -> Result<Vec<UserSummary>, SearchRepositoryError> {
        let rows = UserHitRow::find_by_statement(Self::statement(
            query,
            tier,
            USERS_RANKED_SQL,
            USERS_FUZZY_SQL,
        ))
        .all(self.db.as_ref())
        .await
        .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| UserSummary {
                id: row.id,
                username: row.username,
                display_name: row.display_name,
                avatar_url: row.avatar_url,
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> SearchRepositoryError {
    SearchRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::adapter::outgoing::product_repository_postgres::tests::mock_product;
    use maplit::btreemap;
    use sea_orm::MockDatabase;

    #[test]
    fn test_fuzzy_statement_binds_pattern() {
        let query = SearchQuery::new("la", Some(5));
        let stmt = SearchRepositoryPostgres::statement(&query, SearchTier::Fuzzy, "R", "F");

        assert_eq!(stmt.sql, "F");
        let values = stmt.values.unwrap().0;
        assert_eq!(values.len(), 3);
        assert_eq!(values[1], Value::from("%la%"));
        assert_eq!(values[2], Value::from(5i64));
    }

    #[test]
    fn test_ranked_statement_binds_text_and_limit() {
        let query = SearchQuery::new("lamp", None);
        let stmt = SearchRepositoryPostgres::statement(&query, SearchTier::Ranked, "R", "F");

        assert_eq!(stmt.sql, "R");
        assert_eq!(stmt.values.unwrap().0, vec![Value::from("lamp"), Value::from(10i64)]);
    }

    #[tokio::test]
    async fn test_products_map_models() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_product(id, None)]])
            .into_connection();

        let repo = SearchRepositoryPostgres::new(Arc::new(db));
        let products = repo
            .products(&SearchQuery::new("lamp", None), SearchTier::Ranked)
            .await
            .unwrap();

        assert_eq!(products[0].id, id);
    }

    #[tokio::test]
    async fn test_collections_carry_owner() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "id" => Value::Uuid(Some(Box::new(Uuid::new_v4()))),
                "title" => Value::String(Some(Box::new("Desk setup".to_string()))),
                "description" => Value::String(None),
                "cover_image_url" => Value::String(None),
                "owner_id" => Value::Uuid(Some(Box::new(owner))),
                "username" => Value::String(Some(Box::new("maya".to_string()))),
                "display_name" => Value::String(None),
                "avatar_url" => Value::String(None),
            }]])
            .into_connection();

        let repo = SearchRepositoryPostgres::new(Arc::new(db));
        let hits = repo
            .collections(&SearchQuery::new("desk", None), SearchTier::Fuzzy)
            .await
            .unwrap();

        assert_eq!(hits[0].owner.id, owner);
        assert_eq!(hits[0].title, "Desk setup");
    }
}
