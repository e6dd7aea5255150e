pub mod entities;
pub mod window;
