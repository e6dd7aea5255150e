use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductSummary {
    pub product_id: Uuid,
    pub summary: String,
    /// False when the summary was generated by this request
    pub cached: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProductSummaryError {
    #[error("Product not found")]
    NotFound,

    #[error("Daily AI budget exhausted")]
    BudgetExhausted,

    #[error("AI provider failed: {0}")]
    ProviderFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProductSummaryUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<ProductSummary, GetProductSummaryError>;
}
