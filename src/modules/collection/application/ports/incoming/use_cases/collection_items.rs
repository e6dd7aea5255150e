use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::collection::application::domain::entities::ItemPlacement;

#[derive(Debug, Clone, Copy)]
pub struct AddCollectionItemInput {
    pub product_id: Uuid,
    /// 0-based; appended when omitted
    pub position: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddCollectionItemError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Collection not found")]
    NotFound,

    #[error("Only the owner can change this collection")]
    NotOwner,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Product already in collection")]
    AlreadyInCollection,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddCollectionItemUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
        input: AddCollectionItemInput,
    ) -> Result<ItemPlacement, AddCollectionItemError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveCollectionItemError {
    #[error("Collection not found")]
    NotFound,

    #[error("Only the owner can change this collection")]
    NotOwner,

    #[error("Product is not in this collection")]
    ItemNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveCollectionItemUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
        product_id: Uuid,
    ) -> Result<(), RemoveCollectionItemError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReorderCollectionItemsError {
    #[error("{0}")]
    InvalidOrder(String),

    #[error("Collection not found")]
    NotFound,

    #[error("Only the owner can change this collection")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReorderCollectionItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
        product_ids: Vec<Uuid>,
    ) -> Result<Vec<ItemPlacement>, ReorderCollectionItemsError>;
}
