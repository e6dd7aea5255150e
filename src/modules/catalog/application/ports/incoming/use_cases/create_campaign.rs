use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::catalog::application::domain::entities::Campaign;

#[derive(Debug, Clone)]
pub struct CreateCampaignInput {
    pub brand_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCampaignError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("ends_at must not be before starts_at")]
    InvalidSchedule,

    #[error("Brand not found")]
    BrandNotFound,

    #[error("Only the brand owner can manage its campaigns")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCampaignUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        input: CreateCampaignInput,
    ) -> Result<Campaign, CreateCampaignError>;
}
