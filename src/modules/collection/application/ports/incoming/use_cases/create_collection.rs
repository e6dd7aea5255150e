use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::collection::application::domain::entities::Collection;

#[derive(Debug, Clone, Default)]
pub struct CreateCollectionInput {
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    /// Published unless set to false
    pub is_published: Option<bool>,
    pub product_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCollectionError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("One of the products does not exist")]
    ProductNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCollectionUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        input: CreateCollectionInput,
    ) -> Result<Collection, CreateCollectionError>;
}
