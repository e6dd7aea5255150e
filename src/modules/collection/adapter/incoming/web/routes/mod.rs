mod collections;
mod items;

pub use collections::{
    create_collection_handler, __path_create_collection_handler, delete_collection_handler,
    __path_delete_collection_handler, get_collection_handler, __path_get_collection_handler,
    list_collections_handler, __path_list_collections_handler, list_user_collections_handler,
    __path_list_user_collections_handler, update_collection_handler,
    __path_update_collection_handler, CreateCollectionRequest, ListCollectionsQuery,
    UpdateCollectionRequest,
};
pub use items::{
    add_collection_item_handler, __path_add_collection_item_handler, remove_collection_item_handler,
    __path_remove_collection_item_handler, reorder_collection_items_handler,
    __path_reorder_collection_items_handler, AddItemRequest, ReorderItemsRequest,
};
