use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::BrandDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBrandError {
    #[error("Brand not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetBrandUseCase: Send + Sync {
    async fn execute(&self, brand_id: Uuid) -> Result<BrandDetail, GetBrandError>;
}
