use async_trait::async_trait;
use std::future::Future;

use crate::modules::search::application::domain::entities::SearchResults;
use crate::modules::search::application::domain::query::{SearchQuery, SearchTier};
use crate::modules::search::application::ports::incoming::use_cases::{SearchError, SearchUseCase};
use crate::modules::search::application::ports::outgoing::{
    SearchRepository, SearchRepositoryError,
};

pub struct SearchService<R>
where
    R: SearchRepository,
{
    repository: R,
}

impl<R> SearchService<R>
where
    R: SearchRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Runs the query's first tier and falls back to fuzzy matching when the
/// ranked tier comes back empty.
async fn tiered<T, F, Fut>(query: &SearchQuery, lookup: F) -> Result<Vec<T>, SearchError>
where
    F: Fn(SearchTier) -> Fut,
    Fut: Future<Output = Result<Vec<T>, SearchRepositoryError>>,
{
    let first = query.tier();
    let hits = lookup(first).await.map_err(map_err)?;

    if hits.is_empty() && first == SearchTier::Ranked {
        return lookup(SearchTier::Fuzzy).await.map_err(map_err);
    }
    Ok(hits)
}

fn map_err(e: SearchRepositoryError) -> SearchError {
    SearchError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R> SearchUseCase for SearchService<R>
where
    R: SearchRepository + Send + Sync,
{
    async fn execute(&self, query: SearchQuery) -> Result<SearchResults, SearchError> {
        if query.is_empty() {
            return Ok(SearchResults::default());
        }

        let products = tiered(&query, |tier| self.repository.products(&query, tier)).await?;
        let collections = tiered(&query, |tier| self.repository.collections(&query, tier)).await?;
        let users = tiered(&query, |tier| self.repository.users(&query, tier)).await?;

        Ok(SearchResults {
            products,
            collections,
            users,
        })
    }
}
