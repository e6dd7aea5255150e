use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::ProductDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProductError {
    #[error("Product not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<ProductDetail, GetProductError>;
}
