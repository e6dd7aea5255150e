pub mod credentials;
pub mod entities;
