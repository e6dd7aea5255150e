use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Brand {
    pub id: Uuid,
    pub owner_id: Option<Uuid>,
    pub name: String,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BrandDetail {
    #[serde(flatten)]
    pub brand: Brand,
    pub product_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_urls: Vec<String>,
    /// Minor units of `currency`
    pub price_cents: Option<i64>,
    #[schema(example = "USD")]
    pub currency: String,
    pub source_url: String,
    pub brand_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub ai_summary: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub brand_name: Option<String>,
    pub category_name: Option<String>,
}

/// Flat row as stored in `categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryNode {
    pub id: Uuid,
    pub name: String,
    #[schema(no_recursion)]
    pub children: Vec<CategoryNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Campaign {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CampaignDetail {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub products: Vec<Product>,
}

/// Product fields pre-filled from a scraped page. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductDraft {
    pub source_url: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_urls: Vec<String>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub site_name: Option<String>,
}
