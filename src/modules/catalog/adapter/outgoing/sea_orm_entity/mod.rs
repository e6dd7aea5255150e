pub mod brands;
pub mod campaign_products;
pub mod campaigns;
pub mod categories;
pub mod products;
