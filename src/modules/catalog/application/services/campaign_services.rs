use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::catalog::application::domain::entities::{Campaign, CampaignDetail};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateCampaignError, CreateCampaignInput, CreateCampaignUseCase, GetCampaignError,
    GetCampaignUseCase, LinkCampaignProductError, LinkCampaignProductUseCase, LinkOutcome,
};
use crate::modules::catalog::application::ports::outgoing::{
    BrandRepository, CampaignRepository, CampaignRepositoryError, CreateCampaignData,
    ProductRepository,
};
use crate::shared::text::{optional_text, required_text};

const MAX_CAMPAIGN_NAME: usize = 150;
const MAX_DESCRIPTION: usize = 2000;

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//

pub struct CreateCampaignService<C, B>
where
    C: CampaignRepository,
    B: BrandRepository,
{
    campaigns: C,
    brands: B,
}

impl<C, B> CreateCampaignService<C, B>
where
    C: CampaignRepository,
    B: BrandRepository,
{
    pub fn new(campaigns: C, brands: B) -> Self {
        Self { campaigns, brands }
    }
}

#[async_trait]
impl<C, B> CreateCampaignUseCase for CreateCampaignService<C, B>
where
    C: CampaignRepository + Send + Sync,
    B: BrandRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        input: CreateCampaignInput,
    ) -> Result<Campaign, CreateCampaignError> {
        let name = required_text("name", &input.name, MAX_CAMPAIGN_NAME)
            .map_err(CreateCampaignError::InvalidInput)?;
        let description = optional_text("description", input.description, MAX_DESCRIPTION)
            .map_err(CreateCampaignError::InvalidInput)?;

        if matches!(input.ends_at, Some(end) if end < input.starts_at) {
            return Err(CreateCampaignError::InvalidSchedule);
        }

        let brand = self
            .brands
            .find_brand(input.brand_id)
            .await
            .map_err(|e| CreateCampaignError::RepositoryError(e.to_string()))?
            .ok_or(CreateCampaignError::BrandNotFound)?;

        if !actor.can_manage(brand.brand.owner_id) {
            return Err(CreateCampaignError::NotOwner);
        }

        self.campaigns
            .create_campaign(CreateCampaignData {
                brand_id: input.brand_id,
                name,
                description,
                starts_at: input.starts_at,
                ends_at: input.ends_at,
            })
            .await
            .map_err(|e| match e {
                CampaignRepositoryError::BrandNotFound => CreateCampaignError::BrandNotFound,
                other => CreateCampaignError::RepositoryError(other.to_string()),
            })
    }
}

//
// ──────────────────────────────────────────────────────────
// Read
// ──────────────────────────────────────────────────────────
//

pub struct GetCampaignService<C>
where
    C: CampaignRepository,
{
    campaigns: C,
}

impl<C> GetCampaignService<C>
where
    C: CampaignRepository,
{
    pub fn new(campaigns: C) -> Self {
        Self { campaigns }
    }
}

#[async_trait]
impl<C> GetCampaignUseCase for GetCampaignService<C>
where
    C: CampaignRepository + Send + Sync,
{
    async fn execute(&self, campaign_id: Uuid) -> Result<CampaignDetail, GetCampaignError> {
        self.campaigns
            .find_campaign(campaign_id)
            .await
            .map_err(|e| GetCampaignError::RepositoryError(e.to_string()))?
            .ok_or(GetCampaignError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Link product
// ──────────────────────────────────────────────────────────
//

pub struct LinkCampaignProductService<C, P>
where
    C: CampaignRepository,
    P: ProductRepository,
{
    campaigns: C,
    products: P,
}

impl<C, P> LinkCampaignProductService<C, P>
where
    C: CampaignRepository,
    P: ProductRepository,
{
    pub fn new(campaigns: C, products: P) -> Self {
        Self {
            campaigns,
            products,
        }
    }
}

#[async_trait]
impl<C, P> LinkCampaignProductUseCase for LinkCampaignProductService<C, P>
where
    C: CampaignRepository + Send + Sync,
    P: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        campaign_id: Uuid,
        product_id: Uuid,
    ) -> Result<LinkOutcome, LinkCampaignProductError> {
        let ownership = self
            .campaigns
            .find_ownership(campaign_id)
            .await
            .map_err(|e| LinkCampaignProductError::RepositoryError(e.to_string()))?
            .ok_or(LinkCampaignProductError::CampaignNotFound)?;

        if !actor.can_manage(ownership.owner_id) {
            return Err(LinkCampaignProductError::NotOwner);
        }

        let product = self
            .products
            .find_product(product_id)
            .await
            .map_err(|e| LinkCampaignProductError::RepositoryError(e.to_string()))?
            .ok_or(LinkCampaignProductError::ProductNotFound)?;

        if product.product.brand_id != Some(ownership.brand_id) {
            return Err(LinkCampaignProductError::BrandMismatch);
        }

        let added = self
            .campaigns
            .link_product(campaign_id, product_id)
            .await
            .map_err(|e| match e {
                CampaignRepositoryError::NotFound => LinkCampaignProductError::ProductNotFound,
                other => LinkCampaignProductError::RepositoryError(other.to_string()),
            })?;

        Ok(LinkOutcome {
            campaign_id,
            product_id,
            added,
        })
    }
}
