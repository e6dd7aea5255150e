pub mod ai_budget;
pub mod category_tree;
pub mod entities;
pub mod page_metadata;
