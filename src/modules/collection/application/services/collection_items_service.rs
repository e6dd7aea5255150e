use async_trait::async_trait;
use uuid::Uuid;

use super::access::ensure_owner;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::collection::application::domain::entities::ItemPlacement;
use crate::modules::collection::application::domain::ordering::validate_reorder;
use crate::modules::collection::application::ports::incoming::use_cases::{
    AddCollectionItemError, AddCollectionItemInput, AddCollectionItemUseCase,
    RemoveCollectionItemError, RemoveCollectionItemUseCase, ReorderCollectionItemsError,
    ReorderCollectionItemsUseCase,
};
use crate::modules::collection::application::ports::outgoing::{
    CollectionRepository, CollectionRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Add
// ──────────────────────────────────────────────────────────
//

pub struct AddCollectionItemService<R>
where
    R: CollectionRepository,
{
    repository: R,
}

impl<R> AddCollectionItemService<R>
where
    R: CollectionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddCollectionItemUseCase for AddCollectionItemService<R>
where
    R: CollectionRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
        input: AddCollectionItemInput,
    ) -> Result<ItemPlacement, AddCollectionItemError> {
        if matches!(input.position, Some(p) if p < 0) {
            return Err(AddCollectionItemError::InvalidInput(
                "position must not be negative".to_string(),
            ));
        }

        ensure_owner(&self.repository, actor, collection_id).await?;

        let position = self
            .repository
            .add_item(collection_id, input.product_id, input.position)
            .await
            .map_err(|e| match e {
                CollectionRepositoryError::NotFound => AddCollectionItemError::NotFound,
                CollectionRepositoryError::ProductNotFound => {
                    AddCollectionItemError::ProductNotFound
                }
                CollectionRepositoryError::AlreadyInCollection => {
                    AddCollectionItemError::AlreadyInCollection
                }
                CollectionRepositoryError::DatabaseError(msg) => {
                    AddCollectionItemError::RepositoryError(msg)
                }
            })?;

        Ok(ItemPlacement {
            collection_id,
            product_id: input.product_id,
            position,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Remove
// ──────────────────────────────────────────────────────────
//

pub struct RemoveCollectionItemService<R>
where
    R: CollectionRepository,
{
    repository: R,
}

impl<R> RemoveCollectionItemService<R>
where
    R: CollectionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RemoveCollectionItemUseCase for RemoveCollectionItemService<R>
where
    R: CollectionRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
        product_id: Uuid,
    ) -> Result<(), RemoveCollectionItemError> {
        ensure_owner(&self.repository, actor, collection_id).await?;

        let removed = self
            .repository
            .remove_item(collection_id, product_id)
            .await
            .map_err(|e| match e {
                CollectionRepositoryError::NotFound => RemoveCollectionItemError::NotFound,
                other => RemoveCollectionItemError::RepositoryError(other.to_string()),
            })?;

        if removed {
            Ok(())
        } else {
            Err(RemoveCollectionItemError::ItemNotFound)
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Reorder
// ──────────────────────────────────────────────────────────
//

pub struct ReorderCollectionItemsService<R>
where
    R: CollectionRepository,
{
    repository: R,
}

impl<R> ReorderCollectionItemsService<R>
where
    R: CollectionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReorderCollectionItemsUseCase for ReorderCollectionItemsService<R>
where
    R: CollectionRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
        product_ids: Vec<Uuid>,
    ) -> Result<Vec<ItemPlacement>, ReorderCollectionItemsError> {
        ensure_owner(&self.repository, actor, collection_id).await?;

        let current = self
            .repository
            .item_ids(collection_id)
            .await
            .map_err(|e| ReorderCollectionItemsError::RepositoryError(e.to_string()))?;

        validate_reorder(&current, &product_ids)
            .map_err(|e| ReorderCollectionItemsError::InvalidOrder(e.to_string()))?;

        self.repository
            .reorder_items(collection_id, &product_ids)
            .await
            .map_err(|e| match e {
                CollectionRepositoryError::NotFound => ReorderCollectionItemsError::NotFound,
                other => ReorderCollectionItemsError::RepositoryError(other.to_string()),
            })?;

        Ok(product_ids
            .into_iter()
            .zip(0..)
            .map(|(product_id, position)| ItemPlacement {
                collection_id,
                product_id,
                position,
            })
            .collect())
    }
}
