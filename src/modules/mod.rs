pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod collection;
pub mod engagement;
pub mod media;
pub mod search;
