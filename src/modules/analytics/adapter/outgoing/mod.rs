mod analytics_repository_postgres;

pub use analytics_repository_postgres::AnalyticsRepositoryPostgres;
