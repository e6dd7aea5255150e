pub mod collection_products;
pub mod collections;
