mod create_brand;
mod create_campaign;
mod create_category;
mod create_product;
mod get_brand;
mod get_campaign;
mod get_product;
mod get_product_summary;
mod link_campaign_product;
mod list_categories;
mod scrape_product;

pub use create_brand::{CreateBrandError, CreateBrandInput, CreateBrandUseCase};
pub use create_campaign::{CreateCampaignError, CreateCampaignInput, CreateCampaignUseCase};
pub use create_category::{CreateCategoryError, CreateCategoryInput, CreateCategoryUseCase};
pub use create_product::{CreateProductError, CreateProductInput, CreateProductUseCase};
pub use get_brand::{GetBrandError, GetBrandUseCase};
pub use get_campaign::{GetCampaignError, GetCampaignUseCase};
pub use get_product::{GetProductError, GetProductUseCase};
pub use get_product_summary::{GetProductSummaryError, GetProductSummaryUseCase, ProductSummary};
pub use link_campaign_product::{
    LinkCampaignProductError, LinkCampaignProductUseCase, LinkOutcome,
};
pub use list_categories::{ListCategoriesError, ListCategoriesUseCase};
pub use scrape_product::{ScrapeProductError, ScrapeProductUseCase};
