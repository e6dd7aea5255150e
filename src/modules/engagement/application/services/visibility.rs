use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::engagement::application::ports::incoming::use_cases::{
    AddCommentError, LikeCollectionError, ListCommentsError, RecordViewError,
};
use crate::modules::engagement::application::ports::outgoing::CollectionVisibilityQuery;

#[derive(Debug)]
pub(crate) enum Hidden {
    NotFound,
    Repository(String),
}

/// Missing collections and other people's drafts look the same to callers.
pub(crate) async fn ensure_visible<V>(
    visibility: &V,
    collection_id: Uuid,
    viewer: Option<Actor>,
) -> Result<(), Hidden>
where
    V: CollectionVisibilityQuery + ?Sized,
{
    let found = visibility
        .find_visibility(collection_id)
        .await
        .map_err(|e| Hidden::Repository(e.to_string()))?
        .ok_or(Hidden::NotFound)?;

    if found.visible_to(viewer) {
        Ok(())
    } else {
        Err(Hidden::NotFound)
    }
}

macro_rules! impl_from_hidden {
    ($($error:ident),+ $(,)?) => {
        $(
            impl From<Hidden> for $error {
                fn from(hidden: Hidden) -> Self {
                    match hidden {
                        Hidden::NotFound => $error::NotFound,
                        Hidden::Repository(msg) => $error::RepositoryError(msg),
                    }
                }
            }
        )+
    };
}

impl_from_hidden!(
    LikeCollectionError,
    ListCommentsError,
    AddCommentError,
    RecordViewError,
);
