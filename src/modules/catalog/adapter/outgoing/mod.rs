pub mod http;
pub mod sea_orm_entity;
mod brand_repository_postgres;
mod campaign_repository_postgres;
mod category_repository_postgres;
pub(crate) mod product_repository_postgres;

pub use brand_repository_postgres::BrandRepositoryPostgres;
pub use campaign_repository_postgres::CampaignRepositoryPostgres;
pub use category_repository_postgres::CategoryRepositoryPostgres;
pub use product_repository_postgres::ProductRepositoryPostgres;
