mod campaign_services;
mod category_services;
mod create_brand_service;
mod create_product_service;
mod get_brand_service;
mod get_product_service;
mod product_summary_service;
mod scrape_product_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use campaign_services::{
    CreateCampaignService, GetCampaignService, LinkCampaignProductService,
};
pub use category_services::{CreateCategoryService, ListCategoriesService};
pub use create_brand_service::CreateBrandService;
pub use create_product_service::CreateProductService;
pub use get_brand_service::GetBrandService;
pub use get_product_service::GetProductService;
pub use product_summary_service::ProductSummaryService;
pub use scrape_product_service::ScrapeProductService;
