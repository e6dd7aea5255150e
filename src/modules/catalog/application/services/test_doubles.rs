use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{
    Brand, BrandDetail, Campaign, CampaignDetail, Category, Product, ProductDetail,
};
use crate::modules::catalog::application::ports::outgoing::{
    BrandRepository, BrandRepositoryError, CampaignOwnership, CampaignRepository,
    CampaignRepositoryError, CategoryRepository, CategoryRepositoryError, CreateBrandData,
    CreateCampaignData, CreateCategoryData, CreateProductData, ProductRepository,
    ProductRepositoryError,
};

pub fn sample_brand(owner_id: Option<Uuid>) -> Brand {
    Brand {
        id: Uuid::new_v4(),
        owner_id,
        name: "Lumen".to_string(),
        website_url: Some("https://lumen.example.com".to_string()),
        logo_url: None,
        created_at: Utc::now(),
    }
}

pub fn sample_product(brand_id: Option<Uuid>) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: "Arc Desk Lamp".to_string(),
        description: Some("Brass lamp with a warm LED".to_string()),
        image_urls: vec!["https://cdn.example.com/lamp.jpg".to_string()],
        price_cents: Some(12_950),
        currency: "USD".to_string(),
        source_url: "https://shop.example.com/lamp".to_string(),
        brand_id,
        category_id: None,
        ai_summary: None,
        created_by: Some(Uuid::new_v4()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_detail(product: Product) -> ProductDetail {
    ProductDetail {
        product,
        brand_name: Some("Lumen".to_string()),
        category_name: Some("Lighting".to_string()),
    }
}

pub fn sample_campaign(brand_id: Uuid) -> Campaign {
    Campaign {
        id: Uuid::new_v4(),
        brand_id,
        name: "Spring desk refresh".to_string(),
        description: None,
        starts_at: Utc::now(),
        ends_at: None,
        created_at: Utc::now(),
    }
}

#[derive(Default)]
pub struct MockBrandRepository {
    pub brand: Option<BrandDetail>,
    pub error: Option<BrandRepositoryError>,
    pub created: Mutex<Option<CreateBrandData>>,
}

#[async_trait]
impl BrandRepository for MockBrandRepository {
    async fn create_brand(&self, data: CreateBrandData) -> Result<Brand, BrandRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let brand = Brand {
            id: Uuid::new_v4(),
            owner_id: Some(data.owner_id),
            name: data.name.clone(),
            website_url: data.website_url.clone(),
            logo_url: data.logo_url.clone(),
            created_at: Utc::now(),
        };
        *self.created.lock().unwrap() = Some(data);
        Ok(brand)
    }

    async fn find_brand(&self, _brand_id: Uuid) -> Result<Option<BrandDetail>, BrandRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.brand.clone()),
        }
    }
}

#[derive(Default)]
pub struct MockProductRepository {
    pub product: Option<ProductDetail>,
    pub error: Option<ProductRepositoryError>,
    pub summary_error: Option<ProductRepositoryError>,
    pub created: Mutex<Option<CreateProductData>>,
    pub stored_summary: Mutex<Option<String>>,
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let mut product = sample_product(data.brand_id);
        product.name = data.name.clone();
        product.currency = data.currency.clone();
        product.created_by = Some(data.created_by);
        *self.created.lock().unwrap() = Some(data);
        Ok(product)
    }

    async fn find_product(
        &self,
        _product_id: Uuid,
    ) -> Result<Option<ProductDetail>, ProductRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.product.clone()),
        }
    }

    async fn set_ai_summary(
        &self,
        _product_id: Uuid,
        summary: &str,
    ) -> Result<(), ProductRepositoryError> {
        if let Some(err) = &self.summary_error {
            return Err(err.clone());
        }
        *self.stored_summary.lock().unwrap() = Some(summary.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockCategoryRepository {
    pub categories: Vec<Category>,
    pub error: Option<CategoryRepositoryError>,
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.categories.clone()),
        }
    }

    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(Category {
                id: Uuid::new_v4(),
                name: data.name,
                parent_id: data.parent_id,
            }),
        }
    }
}

#[derive(Default)]
pub struct MockCampaignRepository {
    pub campaign: Option<CampaignDetail>,
    pub ownership: Option<CampaignOwnership>,
    pub already_linked: bool,
    pub error: Option<CampaignRepositoryError>,
    pub created: Mutex<Option<CreateCampaignData>>,
}

#[async_trait]
impl CampaignRepository for MockCampaignRepository {
    async fn create_campaign(
        &self,
        data: CreateCampaignData,
    ) -> Result<Campaign, CampaignRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let mut campaign = sample_campaign(data.brand_id);
        campaign.name = data.name.clone();
        campaign.starts_at = data.starts_at;
        campaign.ends_at = data.ends_at;
        *self.created.lock().unwrap() = Some(data);
        Ok(campaign)
    }

    async fn find_campaign(
        &self,
        _campaign_id: Uuid,
    ) -> Result<Option<CampaignDetail>, CampaignRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.campaign.clone()),
        }
    }

    async fn find_ownership(
        &self,
        _campaign_id: Uuid,
    ) -> Result<Option<CampaignOwnership>, CampaignRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.ownership),
        }
    }

    async fn link_product(
        &self,
        _campaign_id: Uuid,
        _product_id: Uuid,
    ) -> Result<bool, CampaignRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(!self.already_linked),
        }
    }
}
