mod collection_query_postgres;
pub(crate) mod collection_repository_postgres;
pub mod sea_orm_entity;

pub use collection_query_postgres::CollectionQueryPostgres;
pub use collection_repository_postgres::CollectionRepositoryPostgres;
