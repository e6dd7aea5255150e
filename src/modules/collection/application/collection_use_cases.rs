use std::sync::Arc;

use crate::modules::collection::application::ports::incoming::use_cases::{
    AddCollectionItemUseCase, CreateCollectionUseCase, DeleteCollectionUseCase,
    GetCollectionUseCase, ListFeedUseCase, ListUserCollectionsUseCase,
    RemoveCollectionItemUseCase, ReorderCollectionItemsUseCase, UpdateCollectionUseCase,
};

#[derive(Clone)]
pub struct CollectionUseCases {
    pub create: Arc<dyn CreateCollectionUseCase + Send + Sync>,
    pub get: Arc<dyn GetCollectionUseCase + Send + Sync>,
    pub feed: Arc<dyn ListFeedUseCase + Send + Sync>,
    pub list_by_user: Arc<dyn ListUserCollectionsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCollectionUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCollectionUseCase + Send + Sync>,
    pub add_item: Arc<dyn AddCollectionItemUseCase + Send + Sync>,
    pub remove_item: Arc<dyn RemoveCollectionItemUseCase + Send + Sync>,
    pub reorder_items: Arc<dyn ReorderCollectionItemsUseCase + Send + Sync>,
}
