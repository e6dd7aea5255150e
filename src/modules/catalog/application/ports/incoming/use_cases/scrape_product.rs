use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::ProductDraft;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ScrapeProductError {
    #[error("URL must be an absolute http(s) URL")]
    InvalidUrl,

    #[error("Failed to fetch page: {0}")]
    FetchFailed(String),
}

#[async_trait]
pub trait ScrapeProductUseCase: Send + Sync {
    async fn execute(&self, url: &str) -> Result<ProductDraft, ScrapeProductError>;
}
