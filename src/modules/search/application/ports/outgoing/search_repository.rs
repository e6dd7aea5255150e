use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::catalog::application::domain::entities::Product;
use crate::modules::search::application::domain::entities::CollectionHit;
use crate::modules::search::application::domain::query::{SearchQuery, SearchTier};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// One lookup per source and tier. Callers decide when to fall back.
#[async_trait]
pub trait SearchRepository: Send + Sync {
    async fn products(
        &self,
        query: &SearchQuery,
        tier: SearchTier,
    ) -> Result<Vec<Product>, SearchRepositoryError>;

    /// Published collections only.
    async fn collections(
        &self,
        query: &SearchQuery,
        tier: SearchTier,
    ) -> Result<Vec<CollectionHit>, SearchRepositoryError>;

    async fn users(
        &self,
        query: &SearchQuery,
        tier: SearchTier,
    ) -> Result<Vec<UserSummary>, SearchRepositoryError>;
}
