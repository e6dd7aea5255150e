use std::sync::Arc;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateBrandUseCase, CreateCampaignUseCase, CreateCategoryUseCase, CreateProductUseCase,
    GetBrandUseCase, GetCampaignUseCase, GetProductSummaryUseCase, GetProductUseCase,
    LinkCampaignProductUseCase, ListCategoriesUseCase, ScrapeProductUseCase,
};

#[derive(Clone)]
pub struct CatalogUseCases {
    pub create_brand: Arc<dyn CreateBrandUseCase + Send + Sync>,
    pub get_brand: Arc<dyn GetBrandUseCase + Send + Sync>,
    pub create_product: Arc<dyn CreateProductUseCase + Send + Sync>,
    pub get_product: Arc<dyn GetProductUseCase + Send + Sync>,
    pub scrape_product: Arc<dyn ScrapeProductUseCase + Send + Sync>,
    pub product_summary: Arc<dyn GetProductSummaryUseCase + Send + Sync>,
    pub list_categories: Arc<dyn ListCategoriesUseCase + Send + Sync>,
    pub create_category: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub create_campaign: Arc<dyn CreateCampaignUseCase + Send + Sync>,
    pub get_campaign: Arc<dyn GetCampaignUseCase + Send + Sync>,
    pub link_campaign_product: Arc<dyn LinkCampaignProductUseCase + Send + Sync>,
}
