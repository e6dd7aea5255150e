use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::CampaignDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCampaignError {
    #[error("Campaign not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCampaignUseCase: Send + Sync {
    async fn execute(&self, campaign_id: Uuid) -> Result<CampaignDetail, GetCampaignError>;
}
