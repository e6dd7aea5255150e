use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::catalog::application::domain::entities::Brand;

#[derive(Debug, Clone)]
pub struct CreateBrandInput {
    pub name: String,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateBrandError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Brand name already taken")]
    NameTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateBrandUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, input: CreateBrandInput)
        -> Result<Brand, CreateBrandError>;
}
