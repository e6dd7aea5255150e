use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::collection::application::ports::incoming::use_cases::{
    AddCollectionItemError, DeleteCollectionError, RemoveCollectionItemError,
    ReorderCollectionItemsError, UpdateCollectionError,
};
use crate::modules::collection::application::ports::outgoing::CollectionRepository;

/// Why an actor may not modify a collection.
#[derive(Debug)]
pub(crate) enum AccessDenied {
    NotFound,
    NotOwner,
    Repository(String),
}

/// Owner (or admin) check shared by every write on an existing collection.
pub(crate) async fn ensure_owner<R>(
    repository: &R,
    actor: Actor,
    collection_id: Uuid,
) -> Result<(), AccessDenied>
where
    R: CollectionRepository + ?Sized,
{
    let owner_id = repository
        .find_owner(collection_id)
        .await
        .map_err(|e| AccessDenied::Repository(e.to_string()))?
        .ok_or(AccessDenied::NotFound)?;

    if actor.can_manage(Some(owner_id)) {
        Ok(())
    } else {
        Err(AccessDenied::NotOwner)
    }
}

macro_rules! impl_from_access_denied {
    ($($error:ident),+ $(,)?) => {
        $(
            impl From<AccessDenied> for $error {
                fn from(denied: AccessDenied) -> Self {
                    match denied {
                        AccessDenied::NotFound => $error::NotFound,
                        AccessDenied::NotOwner => $error::NotOwner,
                        AccessDenied::Repository(msg) => $error::RepositoryError(msg),
                    }
                }
            }
        )+
    };
}

impl_from_access_denied!(
    UpdateCollectionError,
    DeleteCollectionError,
    AddCollectionItemError,
    RemoveCollectionItemError,
    ReorderCollectionItemsError,
);
