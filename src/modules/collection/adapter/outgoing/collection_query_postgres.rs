use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, Statement,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::collection_products;
use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::catalog::adapter::outgoing::product_repository_postgres::model_to_product;
use crate::modules::catalog::adapter::outgoing::sea_orm_entity::products;
use crate::modules::collection::application::domain::entities::{
    Collection, CollectionCard, CollectionDetail, CollectionItem, FeedSort,
};
use crate::modules::collection::application::ports::outgoing::{
    CollectionQuery, CollectionQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

const CARD_SELECT: &str = r#"
    SELECT
        c.id, c.owner_id, c.title, c.description, c.cover_image_url, c.is_published,
        c.created_at, c.updated_at,
        u.username, u.display_name, u.avatar_url,
        (SELECT COUNT(*) FROM user_likes l WHERE l.collection_id = c.id) AS like_count,
        (SELECT COUNT(*) FROM collection_products cp WHERE cp.collection_id = c.id) AS product_count
    FROM collections c
    JOIN users u ON u.id = c.owner_id
"#;

const DETAIL_SQL: &str = r#"
    SELECT
        c.id, c.owner_id, c.title, c.description, c.cover_image_url, c.is_published,
        c.created_at, c.updated_at,
        u.username, u.display_name, u.avatar_url,
        (SELECT COUNT(*) FROM user_likes l WHERE l.collection_id = c.id) AS like_count,
        (SELECT COUNT(*) FROM comments cm WHERE cm.collection_id = c.id) AS comment_count
    FROM collections c
    JOIN users u ON u.id = c.owner_id
    WHERE c.id = $1
"#;

const COUNT_PUBLISHED_SQL: &str =
    "SELECT COUNT(*) AS num_items FROM collections WHERE is_published = true";

const COUNT_BY_OWNER_SQL: &str = r#"
    SELECT COUNT(*) AS num_items FROM collections
    WHERE owner_id = $1 AND ($2 OR is_published = true)
"#;

#[derive(Debug, FromQueryResult)]
struct CardRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    description: Option<String>,
    cover_image_url: Option<String>,
    is_published: bool,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
    username: String,
    display_name: Option<String>,
    avatar_url: Option<String>,
    like_count: i64,
    product_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct DetailRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    description: Option<String>,
    cover_image_url: Option<String>,
    is_published: bool,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
    username: String,
    display_name: Option<String>,
    avatar_url: Option<String>,
    like_count: i64,
    comment_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    num_items: i64,
}

impl From<CardRow> for CollectionCard {
    fn from(row: CardRow) -> Self {
        CollectionCard {
            collection: Collection {
                id: row.id,
                owner_id: row.owner_id,
                title: row.title,
                description: row.description,
                cover_image_url: row.cover_image_url,
                is_published: row.is_published,
                created_at: row.created_at.with_timezone(&Utc),
                updated_at: row.updated_at.with_timezone(&Utc),
            },
            owner: UserSummary {
                id: row.owner_id,
                username: row.username,
                display_name: row.display_name,
                avatar_url: row.avatar_url,
            },
            like_count: row.like_count.max(0) as u64,
            product_count: row.product_count.max(0) as u64,
        }
    }
}

fn order_clause(sort: FeedSort) -> &'static str {
    match sort {
        FeedSort::Newest => "ORDER BY c.created_at DESC, c.id DESC",
        FeedSort::Popular => "ORDER BY like_count DESC, c.created_at DESC, c.id DESC",
    }
}

#[derive(Clone, Debug)]
pub struct CollectionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CollectionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn count(&self, stmt: Statement) -> Result<u64, CollectionQueryError> {
        let row = CountRow::find_by_statement(stmt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|r| r.num_items.max(0) as u64).unwrap_or(0))
    }

    async fn cards(&self, stmt: Statement) -> Result<Vec<CollectionCard>, CollectionQueryError> {
        let rows = CardRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(CollectionCard::from).collect())
    }

    async fn items(&self, collection_id: Uuid) -> Result<Vec<CollectionItem>, CollectionQueryError> {
        let links = collection_products::Entity::find()
            .filter(collection_products::Column::CollectionId.eq(collection_id))
            .order_by_asc(collection_products::Column::Position)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if links.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<Uuid, products::Model> = products::Entity::find()
            .filter(products::Column::Id.is_in(links.iter().map(|l| l.product_id)))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        links
            .into_iter()
            .filter_map(|link| by_id.remove(&link.product_id).map(|p| (link.position, p)))
            .map(|(position, model)| {
                let product = model_to_product(model)
                    .map_err(|e| CollectionQueryError::SerializationError(e.to_string()))?;
                Ok(CollectionItem { position, product })
            })
            .collect()
    }
}

#[async_trait]
impl CollectionQuery for CollectionQueryPostgres {
    async fn find_detail(
        &self,
        collection_id: Uuid,
    ) -> Result<Option<CollectionDetail>, CollectionQueryError> {
        let Some(row) = DetailRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            DETAIL_SQL,
            [collection_id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let items = self.items(collection_id).await?;

        Ok(Some(CollectionDetail {
            collection: Collection {
                id: row.id,
                owner_id: row.owner_id,
                title: row.title,
                description: row.description,
                cover_image_url: row.cover_image_url,
                is_published: row.is_published,
                created_at: row.created_at.with_timezone(&Utc),
                updated_at: row.updated_at.with_timezone(&Utc),
            },
            owner: UserSummary {
                id: row.owner_id,
                username: row.username,
                display_name: row.display_name,
                avatar_url: row.avatar_url,
            },
            like_count: row.like_count.max(0) as u64,
            comment_count: row.comment_count.max(0) as u64,
            items,
        }))
    }

    async fn list_published(
        &self,
        sort: FeedSort,
        page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, CollectionQueryError> {
        let total = self
            .count(Statement::from_string(
                DatabaseBackend::Postgres,
                COUNT_PUBLISHED_SQL,
            ))
            .await?;

        if total == 0 {
            return Ok(PageResult::empty(page));
        }

        let sql = format!(
            "{CARD_SELECT} WHERE c.is_published = true {} LIMIT $1 OFFSET $2",
            order_clause(sort)
        );
        let items = self
            .cards(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                sql,
                [(page.limit() as i64).into(), (page.offset() as i64).into()],
            ))
            .await?;

        Ok(PageResult::new(items, page, total))
    }

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        include_unpublished: bool,
        page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, CollectionQueryError> {
        let total = self
            .count(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                COUNT_BY_OWNER_SQL,
                [owner_id.into(), include_unpublished.into()],
            ))
            .await?;

        if total == 0 {
            return Ok(PageResult::empty(page));
        }

        let sql = format!(
            "{CARD_SELECT} WHERE c.owner_id = $1 AND ($2 OR c.is_published = true) {} LIMIT $3 OFFSET $4",
            order_clause(FeedSort::Newest)
        );
        let items = self
            .cards(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                sql,
                [
                    owner_id.into(),
                    include_unpublished.into(),
                    (page.limit() as i64).into(),
                    (page.offset() as i64).into(),
                ],
            ))
            .await?;

        Ok(PageResult::new(items, page, total))
    }
}

fn map_db_err(e: DbErr) -> CollectionQueryError {
    CollectionQueryError::DatabaseError(e.to_string())
}
