use async_trait::async_trait;

use crate::modules::search::application::domain::entities::SearchResults;
use crate::modules::search::application::domain::query::SearchQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SearchUseCase: Send + Sync {
    async fn execute(&self, query: SearchQuery) -> Result<SearchResults, SearchError>;
}
