use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::categories::{self, ActiveModel, Column, Entity};
use crate::modules::catalog::application::domain::entities::Category;
use crate::modules::catalog::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CreateCategoryData,
};
use crate::shared::db::{is_foreign_key_violation, is_unique_violation};

#[derive(Clone, Debug)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(to_category).collect())
    }

    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            parent_id: Set(data.parent_id),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                CategoryRepositoryError::ParentNotFound
            } else if is_unique_violation(&e) {
                CategoryRepositoryError::NameTaken
            } else {
                map_db_err(e)
            }
        })?;

        Ok(to_category(inserted))
    }
}

fn to_category(model: categories::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
        parent_id: model.parent_id,
    }
}

fn map_db_err(e: DbErr) -> CategoryRepositoryError {
    CategoryRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_category(name: &str, parent_id: Option<Uuid>) -> categories::Model {
        categories::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            parent_id,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_list_categories_returns_flat_rows() {
        let home = mock_category("Home", None);
        let lighting = mock_category("Lighting", Some(home.id));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![home.clone(), lighting.clone()]])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));
        let rows = repo.list_categories().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].parent_id, Some(home.id));
    }

    #[tokio::test]
    async fn test_create_under_missing_parent_is_parent_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "insert or update on table \"categories\" violates foreign key constraint \"fk_categories_parent_id\""
                    .to_string(),
            )])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_category(CreateCategoryData {
                name: "Lamps".to_string(),
                parent_id: Some(Uuid::new_v4()),
            })
            .await;

        assert!(matches!(result, Err(CategoryRepositoryError::ParentNotFound)));
    }

    #[tokio::test]
    async fn test_create_duplicate_sibling_is_name_taken() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_categories_sibling_name_unique\""
                    .to_string(),
            )])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_category(CreateCategoryData {
                name: "Home".to_string(),
                parent_id: None,
            })
            .await;

        assert!(matches!(result, Err(CategoryRepositoryError::NameTaken)));
    }
}
