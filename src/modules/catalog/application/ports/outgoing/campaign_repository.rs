use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{Campaign, CampaignDetail};

#[derive(Debug, Clone)]
pub struct CreateCampaignData {
    pub brand_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
}

/// Who may manage a campaign: the owner of its brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignOwnership {
    pub campaign_id: Uuid,
    pub brand_id: Uuid,
    pub owner_id: Option<Uuid>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CampaignRepositoryError {
    #[error("Brand not found")]
    BrandNotFound,

    #[error("Campaign or product not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CampaignRepository: Send + Sync {
    async fn create_campaign(
        &self,
        data: CreateCampaignData,
    ) -> Result<Campaign, CampaignRepositoryError>;

    /// Campaign with its linked products ordered by name.
    async fn find_campaign(
        &self,
        campaign_id: Uuid,
    ) -> Result<Option<CampaignDetail>, CampaignRepositoryError>;

    async fn find_ownership(
        &self,
        campaign_id: Uuid,
    ) -> Result<Option<CampaignOwnership>, CampaignRepositoryError>;

    /// Idempotent. Returns true when the link was newly created.
    async fn link_product(
        &self,
        campaign_id: Uuid,
        product_id: Uuid,
    ) -> Result<bool, CampaignRepositoryError>;
}
