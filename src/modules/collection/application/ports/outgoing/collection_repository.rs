use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::collection::application::domain::entities::Collection;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateCollectionData {
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_published: bool,
    /// Stored at positions 0..n in this order. Already de-duplicated.
    pub product_ids: Vec<Uuid>,
}

/// `title` and `is_published` are not nullable, so they are plain options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCollectionData {
    pub title: Option<String>,
    pub description: PatchField<String>,
    pub cover_image_url: PatchField<String>,
    pub is_published: Option<bool>,
}

impl UpdateCollectionData {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_unset()
            && self.cover_image_url.is_unset()
            && self.is_published.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CollectionRepositoryError {
    #[error("Collection not found")]
    NotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Product already in collection")]
    AlreadyInCollection,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side of collections. Every multi-row change runs in one transaction.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    async fn create_collection(
        &self,
        data: CreateCollectionData,
    ) -> Result<Collection, CollectionRepositoryError>;

    async fn find_owner(&self, collection_id: Uuid)
        -> Result<Option<Uuid>, CollectionRepositoryError>;

    async fn update_collection(
        &self,
        collection_id: Uuid,
        data: UpdateCollectionData,
    ) -> Result<Collection, CollectionRepositoryError>;

    /// Items, likes, comments and views go with it (FK cascade).
    async fn delete_collection(&self, collection_id: Uuid) -> Result<(), CollectionRepositoryError>;

    /// Product ids in display order.
    async fn item_ids(&self, collection_id: Uuid) -> Result<Vec<Uuid>, CollectionRepositoryError>;

    /// Inserts at `position` (clamped) or appends, shifting later items.
    /// Returns the stored position.
    async fn add_item(
        &self,
        collection_id: Uuid,
        product_id: Uuid,
        position: Option<i32>,
    ) -> Result<i32, CollectionRepositoryError>;

    /// Removes the item and closes the gap. False when it was not there.
    async fn remove_item(
        &self,
        collection_id: Uuid,
        product_id: Uuid,
    ) -> Result<bool, CollectionRepositoryError>;

    /// Rewrites positions to match `product_ids`, which must be a
    /// permutation of the current items.
    async fn reorder_items(
        &self,
        collection_id: Uuid,
        product_ids: &[Uuid],
    ) -> Result<(), CollectionRepositoryError>;
}
