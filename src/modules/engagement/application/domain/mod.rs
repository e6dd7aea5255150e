pub mod comment_body;
pub mod entities;
