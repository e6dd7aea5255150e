use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::Category;

#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Parent category not found")]
    ParentNotFound,

    #[error("A sibling category with this name already exists")]
    NameTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, input: CreateCategoryInput) -> Result<Category, CreateCategoryError>;
}
