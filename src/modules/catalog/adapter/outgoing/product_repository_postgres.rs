use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::products::{self, ActiveModel, Column, Entity};
use super::sea_orm_entity::{brands, categories};
use crate::modules::catalog::application::domain::entities::{Product, ProductDetail};
use crate::modules::catalog::application::ports::outgoing::{
    CreateProductData, ProductRepository, ProductRepositoryError,
};
use crate::shared::db::is_foreign_key_violation;

#[derive(Clone, Debug)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            image_urls: Set(to_json(&data.image_urls)?),
            price_cents: Set(data.price_cents),
            currency: Set(data.currency),
            source_url: Set(data.source_url),
            brand_id: Set(data.brand_id),
            category_id: Set(data.category_id),
            ai_summary: Set(None),
            created_by: Set(Some(data.created_by)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_err)?;

        model_to_product(inserted)
    }

    async fn find_product(
        &self,
        product_id: Uuid,
    ) -> Result<Option<ProductDetail>, ProductRepositoryError> {
        let Some(model) = Entity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let brand_name = match model.brand_id {
            Some(brand_id) => brands::Entity::find_by_id(brand_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(|b| b.name),
            None => None,
        };

        let category_name = match model.category_id {
            Some(category_id) => categories::Entity::find_by_id(category_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(|c| c.name),
            None => None,
        };

        Ok(Some(ProductDetail {
            product: model_to_product(model)?,
            brand_name,
            category_name,
        }))
    }

    async fn set_ai_summary(
        &self,
        product_id: Uuid,
        summary: &str,
    ) -> Result<(), ProductRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::AiSummary, Expr::value(summary.to_string()))
            .filter(Column::Id.eq(product_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProductRepositoryError::NotFound);
        }

        Ok(())
    }
}

pub(crate) fn model_to_product(model: products::Model) -> Result<Product, ProductRepositoryError> {
    Ok(Product {
        id: model.id,
        name: model.name,
        description: model.description,
        image_urls: from_json(&model.image_urls)?,
        price_cents: model.price_cents,
        currency: model.currency,
        source_url: model.source_url,
        brand_id: model.brand_id,
        category_id: model.category_id,
        ai_summary: model.ai_summary,
        created_by: model.created_by,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProductRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProductRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProductRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProductRepositoryError::SerializationError(e.to_string()))
}

fn map_insert_err(e: DbErr) -> ProductRepositoryError {
    if !is_foreign_key_violation(&e) {
        return map_db_err(e);
    }

    let msg = e.to_string();
    if msg.contains("fk_products_brand_id") {
        ProductRepositoryError::InvalidReference("brand_id".to_string())
    } else if msg.contains("fk_products_category_id") {
        ProductRepositoryError::InvalidReference("category_id".to_string())
    } else {
        ProductRepositoryError::InvalidReference(msg)
    }
}

fn map_db_err(e: DbErr) -> ProductRepositoryError {
    ProductRepositoryError::DatabaseError(e.to_string())
}
