use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::ProductDetail;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    #[error("Provider request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected provider response: {0}")]
    BadResponse(String),
}

/// Generative-AI provider that writes a short shopper-facing summary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn generate_summary(&self, product: &ProductDetail) -> Result<String, SummaryError>;
}
