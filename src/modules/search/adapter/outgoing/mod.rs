mod search_repository_postgres;

pub use search_repository_postgres::SearchRepositoryPostgres;
