pub mod collection_query;
pub mod collection_repository;

pub use collection_query::{CollectionQuery, CollectionQueryError};
pub use collection_repository::{
    CollectionRepository, CollectionRepositoryError, CreateCollectionData, UpdateCollectionData,
};
