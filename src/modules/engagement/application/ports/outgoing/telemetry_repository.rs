use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::engagement::application::domain::entities::NewClick;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TelemetryRepositoryError {
    #[error("Collection not found")]
    CollectionNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Append-only view and click rows, plus the lookups a redirect needs.
#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    async fn record_view(
        &self,
        collection_id: Uuid,
        viewer_id: Option<Uuid>,
    ) -> Result<(), TelemetryRepositoryError>;

    async fn product_source_url(
        &self,
        product_id: Uuid,
    ) -> Result<Option<String>, TelemetryRepositoryError>;

    async fn is_in_collection(
        &self,
        collection_id: Uuid,
        product_id: Uuid,
    ) -> Result<bool, TelemetryRepositoryError>;

    async fn record_click(&self, click: NewClick) -> Result<(), TelemetryRepositoryError>;
}
