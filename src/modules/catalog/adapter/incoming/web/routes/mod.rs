mod brands;
mod campaigns;
mod categories;
mod products;

pub use brands::{
    create_brand_handler, __path_create_brand_handler, get_brand_handler, __path_get_brand_handler,
    CreateBrandRequest,
};
pub use campaigns::{
    create_campaign_handler, __path_create_campaign_handler, get_campaign_handler,
    __path_get_campaign_handler, link_campaign_product_handler,
    __path_link_campaign_product_handler, CreateCampaignRequest, LinkProductRequest,
};
pub use categories::{
    create_category_handler, __path_create_category_handler, list_categories_handler,
    __path_list_categories_handler, CreateCategoryRequest,
};
pub use products::{
    create_product_handler, __path_create_product_handler, get_product_handler,
    __path_get_product_handler, get_product_summary_handler, __path_get_product_summary_handler,
    scrape_product_handler, __path_scrape_product_handler, CreateProductRequest,
    ScrapeProductRequest,
};
