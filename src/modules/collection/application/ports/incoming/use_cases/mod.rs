mod collection_items;
mod create_collection;
mod get_collection;
mod list_collections;
mod update_collection;

pub use collection_items::{
    AddCollectionItemError, AddCollectionItemInput, AddCollectionItemUseCase,
    RemoveCollectionItemError, RemoveCollectionItemUseCase, ReorderCollectionItemsError,
    ReorderCollectionItemsUseCase,
};
pub use create_collection::{
    CreateCollectionError, CreateCollectionInput, CreateCollectionUseCase,
};
pub use get_collection::{GetCollectionError, GetCollectionUseCase};
pub use list_collections::{
    ListCollectionsError, ListFeedUseCase, ListUserCollectionsUseCase,
};
pub use update_collection::{
    DeleteCollectionError, DeleteCollectionUseCase, UpdateCollectionError,
    UpdateCollectionInput, UpdateCollectionUseCase,
};
