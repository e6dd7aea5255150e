pub mod search_repository;

pub use search_repository::{SearchRepository, SearchRepositoryError};
