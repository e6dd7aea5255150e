pub mod analytics_repository;

pub use analytics_repository::{
    AnalyticsRepository, AnalyticsRepositoryError, BrandProduct, CreatorCollection,
};
