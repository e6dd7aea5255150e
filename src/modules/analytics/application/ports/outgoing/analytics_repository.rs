use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::analytics::application::domain::entities::TimedEvent;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyticsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandProduct {
    pub product_id: Uuid,
    pub name: String,
    pub collection_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorCollection {
    pub collection_id: Uuid,
    pub title: String,
}

/// Raw events since a point in time. Bucketing happens in the service.
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// `None` when the brand does not exist; `Some(None)` when it has no owner.
    async fn brand_owner(&self, brand_id: Uuid)
        -> Result<Option<Option<Uuid>>, AnalyticsRepositoryError>;

    /// The brand's products with their placement counts.
    async fn brand_products(&self, brand_id: Uuid)
        -> Result<Vec<BrandProduct>, AnalyticsRepositoryError>;

    /// Clicks on the brand's products; subject is the product.
    async fn brand_clicks(
        &self,
        brand_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError>;

    /// Views of collections holding any of the brand's products; subject is the collection.
    async fn brand_collection_views(
        &self,
        brand_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError>;

    async fn creator_collections(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<CreatorCollection>, AnalyticsRepositoryError>;

    /// Views of the creator's collections; subject is the collection.
    async fn creator_views(
        &self,
        owner_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError>;

    /// Clicks attributed to the creator's collections; subject is the collection.
    async fn creator_clicks(
        &self,
        owner_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError>;

    /// Likes on the creator's collections; subject is the collection.
    async fn creator_likes(
        &self,
        owner_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError>;
}
