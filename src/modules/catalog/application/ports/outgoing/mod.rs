pub mod brand_repository;
pub mod campaign_repository;
pub mod category_repository;
pub mod product_page_fetcher;
pub mod product_repository;
pub mod summary_generator;

pub use brand_repository::{BrandRepository, BrandRepositoryError, CreateBrandData};
pub use campaign_repository::{
    CampaignOwnership, CampaignRepository, CampaignRepositoryError, CreateCampaignData,
};
pub use category_repository::{CategoryRepository, CategoryRepositoryError, CreateCategoryData};
pub use product_page_fetcher::{PageFetchError, ProductPageFetcher};
pub use product_repository::{CreateProductData, ProductRepository, ProductRepositoryError};
pub use summary_generator::{SummaryError, SummaryGenerator};
