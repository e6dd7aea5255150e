use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use super::visibility::ensure_visible;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::engagement::application::domain::entities::NewClick;
use crate::modules::engagement::application::ports::incoming::use_cases::{
    ClickRequest, RecordViewError, RecordViewUseCase, TrackClickError, TrackClickUseCase,
};
use crate::modules::engagement::application::ports::outgoing::{
    CollectionVisibilityQuery, TelemetryRepository, TelemetryRepositoryError,
};

pub const MAX_REFERRER_CHARS: usize = 1000;

pub struct TelemetryService<R, V>
where
    R: TelemetryRepository,
    V: CollectionVisibilityQuery,
{
    repository: R,
    visibility: V,
}

impl<R, V> TelemetryService<R, V>
where
    R: TelemetryRepository,
    V: CollectionVisibilityQuery,
{
    pub fn new(repository: R, visibility: V) -> Self {
        Self {
            repository,
            visibility,
        }
    }

    /// A click only keeps its collection when the product is really in it.
    async fn attributed_collection(&self, collection_id: Option<Uuid>, product_id: Uuid) -> Option<Uuid> {
        let collection_id = collection_id?;
        match self.repository.is_in_collection(collection_id, product_id).await {
            Ok(true) => Some(collection_id),
            Ok(false) => None,
            Err(e) => {
                warn!(collection_id = %collection_id, error = %e, "Collection lookup failed for click");
                None
            }
        }
    }
}

fn clean_referrer(referrer: Option<String>) -> Option<String> {
    referrer
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .map(|r| r.chars().take(MAX_REFERRER_CHARS).collect())
}

#[async_trait]
impl<R, V> RecordViewUseCase for TelemetryService<R, V>
where
    R: TelemetryRepository + Send + Sync,
    V: CollectionVisibilityQuery + Send + Sync,
{
    async fn execute(
        &self,
        collection_id: Uuid,
        viewer: Option<Actor>,
    ) -> Result<(), RecordViewError> {
        ensure_visible(&self.visibility, collection_id, viewer).await?;

        self.repository
            .record_view(collection_id, viewer.map(|v| v.id.value()))
            .await
            .map_err(|e| match e {
                TelemetryRepositoryError::CollectionNotFound => RecordViewError::NotFound,
                TelemetryRepositoryError::DatabaseError(msg) => RecordViewError::RepositoryError(msg),
            })
    }
}

#[async_trait]
impl<R, V> TrackClickUseCase for TelemetryService<R, V>
where
    R: TelemetryRepository + Send + Sync,
    V: CollectionVisibilityQuery + Send + Sync,
{
    async fn execute(&self, request: ClickRequest) -> Result<String, TrackClickError> {
        let source_url = self
            .repository
            .product_source_url(request.product_id)
            .await
            .map_err(|e| TrackClickError::RepositoryError(e.to_string()))?
            .ok_or(TrackClickError::ProductNotFound)?;

        let click = NewClick {
            product_id: request.product_id,
            collection_id: self
                .attributed_collection(request.collection_id, request.product_id)
                .await,
            user_id: request.viewer.map(|v| v.value()),
            referrer: clean_referrer(request.referrer),
        };

        // The shopper still gets redirected when the click row cannot be written.
        if let Err(e) = self.repository.record_click(click).await {
            warn!(product_id = %request.product_id, error = %e, "Failed to record click");
        }

        Ok(source_url)
    }
}
