use async_trait::async_trait;

use crate::modules::catalog::application::domain::category_tree::build_category_tree;
use crate::modules::catalog::application::domain::entities::{Category, CategoryNode};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateCategoryError, CreateCategoryInput, CreateCategoryUseCase, ListCategoriesError,
    ListCategoriesUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CreateCategoryData,
};
use crate::shared::text::required_text;

const MAX_CATEGORY_NAME: usize = 80;

pub struct ListCategoriesService<R>
where
    R: CategoryRepository,
{
    repository: R,
}

impl<R> ListCategoriesService<R>
where
    R: CategoryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListCategoriesUseCase for ListCategoriesService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CategoryNode>, ListCategoriesError> {
        let flat = self
            .repository
            .list_categories()
            .await
            .map_err(|e| ListCategoriesError::RepositoryError(e.to_string()))?;

        Ok(build_category_tree(flat))
    }
}

pub struct CreateCategoryService<R>
where
    R: CategoryRepository,
{
    repository: R,
}

impl<R> CreateCategoryService<R>
where
    R: CategoryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, input: CreateCategoryInput) -> Result<Category, CreateCategoryError> {
        let name = required_text("name", &input.name, MAX_CATEGORY_NAME)
            .map_err(CreateCategoryError::InvalidInput)?;

        self.repository
            .create_category(CreateCategoryData {
                name,
                parent_id: input.parent_id,
            })
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::ParentNotFound => CreateCategoryError::ParentNotFound,
                CategoryRepositoryError::NameTaken => CreateCategoryError::NameTaken,
                CategoryRepositoryError::DatabaseError(msg) => {
                    CreateCategoryError::RepositoryError(msg)
                }
            })
    }
}
