use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::CategoryNode;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCategoriesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CategoryNode>, ListCategoriesError>;
}
