use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use super::product_repository_postgres::model_to_product;
use super::sea_orm_entity::campaigns::{self, ActiveModel, Entity};
use super::sea_orm_entity::{brands, campaign_products, products};
use crate::modules::catalog::application::domain::entities::{Campaign, CampaignDetail};
use crate::modules::catalog::application::ports::outgoing::{
    CampaignOwnership, CampaignRepository, CampaignRepositoryError, CreateCampaignData,
};
use crate::shared::db::is_foreign_key_violation;

const LINK_PRODUCT_SQL: &str = r#"
    INSERT INTO campaign_products (campaign_id, product_id)
    VALUES ($1, $2)
    ON CONFLICT (campaign_id, product_id) DO NOTHING
"#;

#[derive(Clone, Debug)]
pub struct CampaignRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CampaignRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CampaignRepository for CampaignRepositoryPostgres {
    async fn create_campaign(
        &self,
        data: CreateCampaignData,
    ) -> Result<Campaign, CampaignRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            brand_id: Set(data.brand_id),
            name: Set(data.name),
            description: Set(data.description),
            starts_at: Set(data.starts_at.fixed_offset()),
            ends_at: Set(data.ends_at.map(|t| t.fixed_offset())),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                CampaignRepositoryError::BrandNotFound
            } else {
                map_db_err(e)
            }
        })?;

        Ok(to_campaign(inserted))
    }

    async fn find_campaign(
        &self,
        campaign_id: Uuid,
    ) -> Result<Option<CampaignDetail>, CampaignRepositoryError> {
        let Some(model) = Entity::find_by_id(campaign_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let product_ids: Vec<Uuid> = campaign_products::Entity::find()
            .filter(campaign_products::Column::CampaignId.eq(campaign_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|link| link.product_id)
            .collect();

        let products = if product_ids.is_empty() {
            Vec::new()
        } else {
            products::Entity::find()
                .filter(products::Column::Id.is_in(product_ids))
                .order_by_asc(products::Column::Name)
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .map(|p| {
                    model_to_product(p)
                        .map_err(|e| CampaignRepositoryError::DatabaseError(e.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Some(CampaignDetail {
            campaign: to_campaign(model),
            products,
        }))
    }

    async fn find_ownership(
        &self,
        campaign_id: Uuid,
    ) -> Result<Option<CampaignOwnership>, CampaignRepositoryError> {
        let Some(campaign) = Entity::find_by_id(campaign_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let owner_id = brands::Entity::find_by_id(campaign.brand_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .and_then(|brand| brand.owner_id);

        Ok(Some(CampaignOwnership {
            campaign_id,
            brand_id: campaign.brand_id,
            owner_id,
        }))
    }

    async fn link_product(
        &self,
        campaign_id: Uuid,
        product_id: Uuid,
    ) -> Result<bool, CampaignRepositoryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            LINK_PRODUCT_SQL,
            [campaign_id.into(), product_id.into()],
        );

        let result = self.db.execute(stmt).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                CampaignRepositoryError::NotFound
            } else {
                map_db_err(e)
            }
        })?;

        Ok(result.rows_affected() == 1)
    }
}

fn to_campaign(model: campaigns::Model) -> Campaign {
    Campaign {
        id: model.id,
        brand_id: model.brand_id,
        name: model.name,
        description: model.description,
        starts_at: model.starts_at.with_timezone(&Utc),
        ends_at: model.ends_at.map(|t| t.with_timezone(&Utc)),
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn map_db_err(e: DbErr) -> CampaignRepositoryError {
    CampaignRepositoryError::DatabaseError(e.to_string())
}
