use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::collection::application::domain::entities::Collection;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCollectionInput {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub cover_image_url: PatchField<String>,
    pub is_published: PatchField<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCollectionError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Collection not found")]
    NotFound,

    #[error("Only the owner can change this collection")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCollectionUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
        input: UpdateCollectionInput,
    ) -> Result<Collection, UpdateCollectionError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCollectionError {
    #[error("Collection not found")]
    NotFound,

    #[error("Only the owner can delete this collection")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCollectionUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, collection_id: Uuid)
        -> Result<(), DeleteCollectionError>;
}
