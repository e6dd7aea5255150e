use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::brands::{self, ActiveModel, Entity};
use super::sea_orm_entity::products;
use crate::modules::catalog::application::domain::entities::{Brand, BrandDetail};
use crate::modules::catalog::application::ports::outgoing::{
    BrandRepository, BrandRepositoryError, CreateBrandData,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct BrandRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BrandRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BrandRepository for BrandRepositoryPostgres {
    async fn create_brand(&self, data: CreateBrandData) -> Result<Brand, BrandRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(Some(data.owner_id)),
            name: Set(data.name),
            website_url: Set(data.website_url),
            logo_url: Set(data.logo_url),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                BrandRepositoryError::NameTaken
            } else {
                map_db_err(e)
            }
        })?;

        Ok(to_brand(inserted))
    }

    async fn find_brand(&self, brand_id: Uuid) -> Result<Option<BrandDetail>, BrandRepositoryError> {
        let Some(model) = Entity::find_by_id(brand_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let product_count = products::Entity::find()
            .filter(products::Column::BrandId.eq(brand_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(BrandDetail {
            brand: to_brand(model),
            product_count,
        }))
    }
}

fn to_brand(model: brands::Model) -> Brand {
    Brand {
        id: model.id,
        owner_id: model.owner_id,
        name: model.name,
        website_url: model.website_url,
        logo_url: model.logo_url,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn map_db_err(e: DbErr) -> BrandRepositoryError {
    BrandRepositoryError::DatabaseError(e.to_string())
}
