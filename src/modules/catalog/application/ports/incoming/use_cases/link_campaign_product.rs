use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct LinkOutcome {
    pub campaign_id: Uuid,
    pub product_id: Uuid,
    /// False when the product was already linked
    pub added: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LinkCampaignProductError {
    #[error("Campaign not found")]
    CampaignNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Only the brand owner can manage its campaigns")]
    NotOwner,

    #[error("Product does not belong to the campaign's brand")]
    BrandMismatch,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LinkCampaignProductUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        campaign_id: Uuid,
        product_id: Uuid,
    ) -> Result<LinkOutcome, LinkCampaignProductError>;
}
