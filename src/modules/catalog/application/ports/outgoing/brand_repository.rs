use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{Brand, BrandDetail};

#[derive(Debug, Clone)]
pub struct CreateBrandData {
    pub owner_id: Uuid,
    pub name: String,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrandRepositoryError {
    /// `idx_brands_name_unique` (case-insensitive) violated.
    #[error("Brand name already taken")]
    NameTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn create_brand(&self, data: CreateBrandData) -> Result<Brand, BrandRepositoryError>;

    /// Brand plus the number of products pointing at it.
    async fn find_brand(&self, brand_id: Uuid) -> Result<Option<BrandDetail>, BrandRepositoryError>;
}
