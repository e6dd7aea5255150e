use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::catalog::application::domain::entities::Product;

#[derive(Debug, Clone, Default)]
pub struct CreateProductInput {
    pub name: String,
    pub description: Option<String>,
    pub image_urls: Vec<String>,
    pub price_cents: Option<i64>,
    /// Defaults to USD
    pub currency: Option<String>,
    pub source_url: String,
    pub brand_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProductError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    InvalidReference(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        created_by: UserId,
        input: CreateProductInput,
    ) -> Result<Product, CreateProductError>;
}
