mod access;
mod collection_items_service;
mod create_collection_service;
mod get_collection_service;
mod list_collections_service;
mod update_collection_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use collection_items_service::{
    AddCollectionItemService, RemoveCollectionItemService, ReorderCollectionItemsService,
};
pub use create_collection_service::CreateCollectionService;
pub use get_collection_service::GetCollectionService;
pub use list_collections_service::{ListFeedService, ListUserCollectionsService};
pub use update_collection_service::{DeleteCollectionService, UpdateCollectionService};
