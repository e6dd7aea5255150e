use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A telemetry row reduced to what reporting needs: what it is about and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedEvent {
    pub subject_id: Uuid,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductClicks {
    pub product_id: Uuid,
    pub name: String,
    pub clicks: u64,
}

/// How many collections currently contain the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductPlacement {
    pub product_id: Uuid,
    pub name: String,
    pub collection_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BrandReport {
    pub brand_id: Uuid,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub daily_clicks: Vec<DailyCount>,
    pub daily_views: Vec<DailyCount>,
    pub total_clicks: u64,
    pub total_views: u64,
    pub top_products: Vec<ProductClicks>,
    pub placements: Vec<ProductPlacement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CollectionViews {
    pub collection_id: Uuid,
    pub title: String,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CreatorReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub daily_views: Vec<DailyCount>,
    pub daily_clicks: Vec<DailyCount>,
    pub daily_likes: Vec<DailyCount>,
    pub total_views: u64,
    pub total_clicks: u64,
    pub total_likes: u64,
    pub top_collections: Vec<CollectionViews>,
}
