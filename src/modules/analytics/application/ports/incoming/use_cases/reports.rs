use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::analytics::application::domain::entities::{BrandReport, CreatorReport};
use crate::modules::auth::application::domain::entities::{Actor, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrandReportError {
    #[error("Brand not found")]
    NotFound,
    #[error("Only the brand owner can view its analytics")]
    NotOwner,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait BrandReportUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, brand_id: Uuid) -> Result<BrandReport, BrandReportError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatorReportError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatorReportUseCase: Send + Sync {
    async fn execute(&self, creator: UserId) -> Result<CreatorReport, CreatorReportError>;
}
