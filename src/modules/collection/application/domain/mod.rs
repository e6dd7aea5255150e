pub mod entities;
pub mod ordering;
