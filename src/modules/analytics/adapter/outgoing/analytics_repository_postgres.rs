use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::analytics::application::domain::entities::TimedEvent;
use crate::modules::analytics::application::ports::outgoing::{
    AnalyticsRepository, AnalyticsRepositoryError, BrandProduct, CreatorCollection,
};
use crate::modules::catalog::adapter::outgoing::sea_orm_entity::brands;
use crate::modules::collection::adapter::outgoing::sea_orm_entity::collections;

const BRAND_PRODUCTS_SQL: &str = r#"
    SELECT p.id AS product_id, p.name, COUNT(cp.collection_id) AS collection_count
    FROM products p
    LEFT JOIN collection_products cp ON cp.product_id = p.id
    WHERE p.brand_id = $1
    GROUP BY p.id, p.name
    ORDER BY p.name
"#;

const BRAND_CLICKS_SQL: &str = r#"
    SELECT k.product_id AS subject_id, k.created_at AS at
    FROM clicks k
    JOIN products p ON p.id = k.product_id
    WHERE p.brand_id = $1 AND k.created_at >= $2
"#;

const BRAND_VIEWS_SQL: &str = r#"
    SELECT v.collection_id AS subject_id, v.created_at AS at
    FROM collection_views v
    WHERE v.created_at >= $2
      AND EXISTS (
          SELECT 1
          FROM collection_products cp
          JOIN products p ON p.id = cp.product_id
          WHERE cp.collection_id = v.collection_id AND p.brand_id = $1
      )
"#;

const CREATOR_VIEWS_SQL: &str = r#"
    SELECT v.collection_id AS subject_id, v.created_at AS at
    FROM collection_views v
    JOIN collections c ON c.id = v.collection_id
    WHERE c.owner_id = $1 AND v.created_at >= $2
"#;

const CREATOR_CLICKS_SQL: &str = r#"
    SELECT k.collection_id AS subject_id, k.created_at AS at
    FROM clicks k
    JOIN collections c ON c.id = k.collection_id
    WHERE c.owner_id = $1 AND k.created_at >= $2
"#;

const CREATOR_LIKES_SQL: &str = r#"
    SELECT l.collection_id AS subject_id, l.created_at AS at
    FROM user_likes l
    JOIN collections c ON c.id = l.collection_id
    WHERE c.owner_id = $1 AND l.created_at >= $2
"#;

#[derive(Debug, FromQueryResult)]
struct EventRow {
    subject_id: Uuid,
    at: DateTimeWithTimeZone,
}

#[derive(Debug, FromQueryResult)]
struct BrandProductRow {
    product_id: Uuid,
    name: String,
    collection_count: i64,
}

#[derive(Clone, Debug)]
pub struct AnalyticsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AnalyticsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn events(
        &self,
        sql: &str,
        id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError> {
        let rows = EventRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            [id.into(), since.into()],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| TimedEvent {
                subject_id: row.subject_id,
                at: row.at.with_timezone(&Utc),
            })
            .collect())
    }
}

#[async_trait]
impl AnalyticsRepository for AnalyticsRepositoryPostgres {
    async fn brand_owner(
        &self,
        brand_id: Uuid,
    ) -> Result<Option<Option<Uuid>>, AnalyticsRepositoryError> {
        let brand = brands::Entity::find_by_id(brand_id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(brand.map(|b| b.owner_id))
    }

    async fn brand_products(
        &self,
        brand_id: Uuid,
    ) -> Result<Vec<BrandProduct>, AnalyticsRepositoryError> {
        let rows = BrandProductRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            BRAND_PRODUCTS_SQL,
            [brand_id.into()],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| BrandProduct {
                product_id: row.product_id,
                name: row.name,
                collection_count: row.collection_count.max(0) as u64,
            })
            .collect())
    }

    async fn brand_clicks(
        &self,
        brand_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError> {
        self.events(BRAND_CLICKS_SQL, brand_id, since).await
    }

    async fn brand_collection_views(
        &self,
        brand_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError> {
        self.events(BRAND_VIEWS_SQL, brand_id, since).await
    }

    async fn creator_collections(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<CreatorCollection>, AnalyticsRepositoryError> {
        let models = collections::Entity::find()
            .filter(collections::Column::OwnerId.eq(owner_id))
            .order_by_asc(collections::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| CreatorCollection {
                collection_id: m.id,
                title: m.title,
            })
            .collect())
    }

    async fn creator_views(
        &self,
        owner_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError> {
        self.events(CREATOR_VIEWS_SQL, owner_id, since).await
    }

    async fn creator_clicks(
        &self,
        owner_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError> {
        self.events(CREATOR_CLICKS_SQL, owner_id, since).await
    }

    async fn creator_likes(
        &self,
        owner_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError> {
        self.events(CREATOR_LIKES_SQL, owner_id, since).await
    }
}

fn map_db_err(e: DbErr) -> AnalyticsRepositoryError {
    AnalyticsRepositoryError::DatabaseError(e.to_string())
}
