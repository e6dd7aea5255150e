pub mod clicks;
pub mod collection_views;
pub mod comments;
pub mod follows;
pub mod user_likes;
