use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{Product, ProductDetail};

#[derive(Debug, Clone)]
pub struct CreateProductData {
    pub name: String,
    pub description: Option<String>,
    pub image_urls: Vec<String>,
    pub price_cents: Option<i64>,
    pub currency: String,
    pub source_url: String,
    pub brand_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub created_by: Uuid,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductRepositoryError {
    /// brand_id or category_id points nowhere.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Product not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(&self, data: CreateProductData)
        -> Result<Product, ProductRepositoryError>;

    /// Product with its brand and category names.
    async fn find_product(
        &self,
        product_id: Uuid,
    ) -> Result<Option<ProductDetail>, ProductRepositoryError>;

    async fn set_ai_summary(
        &self,
        product_id: Uuid,
        summary: &str,
    ) -> Result<(), ProductRepositoryError>;
}
