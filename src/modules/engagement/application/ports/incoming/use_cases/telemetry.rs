use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Actor, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordViewError {
    #[error("Collection not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RecordViewUseCase: Send + Sync {
    async fn execute(
        &self,
        collection_id: Uuid,
        viewer: Option<Actor>,
    ) -> Result<(), RecordViewError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickRequest {
    pub product_id: Uuid,
    pub collection_id: Option<Uuid>,
    pub viewer: Option<UserId>,
    pub referrer: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TrackClickError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Records the click and returns the product URL to redirect to.
#[async_trait]
pub trait TrackClickUseCase: Send + Sync {
    async fn execute(&self, request: ClickRequest) -> Result<String, TrackClickError>;
}
