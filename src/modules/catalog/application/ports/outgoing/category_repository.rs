use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::Category;

#[derive(Debug, Clone)]
pub struct CreateCategoryData {
    pub name: String,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Parent category not found")]
    ParentNotFound,

    /// Same name (case-insensitive) under the same parent.
    #[error("Category name already taken")]
    NameTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError>;
}
