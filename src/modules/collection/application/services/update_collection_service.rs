use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::access::ensure_owner;
use super::create_collection_service::{MAX_DESCRIPTION, MAX_TITLE};
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::collection::application::domain::entities::Collection;
use crate::modules::collection::application::ports::incoming::use_cases::{
    DeleteCollectionError, DeleteCollectionUseCase, UpdateCollectionError, UpdateCollectionInput,
    UpdateCollectionUseCase,
};
use crate::modules::collection::application::ports::outgoing::{
    CollectionRepository, CollectionRepositoryError, UpdateCollectionData,
};
use crate::shared::patch::PatchField;
use crate::shared::text::{optional_http_url, optional_text, required_text};

fn validate_patch(input: UpdateCollectionInput) -> Result<UpdateCollectionData, String> {
    let title = match input.title {
        PatchField::Unset => None,
        PatchField::Null => return Err("title cannot be null".to_string()),
        PatchField::Value(raw) => Some(required_text("title", &raw, MAX_TITLE)?),
    };

    let description = match input.description {
        PatchField::Value(raw) => match optional_text("description", Some(raw), MAX_DESCRIPTION)? {
            Some(text) => PatchField::Value(text),
            None => PatchField::Null,
        },
        other => other,
    };

    let cover_image_url = match input.cover_image_url {
        PatchField::Value(raw) => match optional_http_url("cover_image_url", Some(raw))? {
            Some(url) => PatchField::Value(url),
            None => PatchField::Null,
        },
        other => other,
    };

    let is_published = match input.is_published {
        PatchField::Unset => None,
        PatchField::Null => return Err("is_published cannot be null".to_string()),
        PatchField::Value(v) => Some(v),
    };

    Ok(UpdateCollectionData {
        title,
        description,
        cover_image_url,
        is_published,
    })
}

pub struct UpdateCollectionService<R>
where
    R: CollectionRepository,
{
    repository: R,
}

impl<R> UpdateCollectionService<R>
where
    R: CollectionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCollectionUseCase for UpdateCollectionService<R>
where
    R: CollectionRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        collection_id: Uuid,
        input: UpdateCollectionInput,
    ) -> Result<Collection, UpdateCollectionError> {
        let data = validate_patch(input).map_err(UpdateCollectionError::InvalidInput)?;

        ensure_owner(&self.repository, actor, collection_id).await?;

        self.repository
            .update_collection(collection_id, data)
            .await
            .map_err(|e| match e {
                CollectionRepositoryError::NotFound => UpdateCollectionError::NotFound,
                other => UpdateCollectionError::RepositoryError(other.to_string()),
            })
    }
}

pub struct DeleteCollectionService<R>
where
    R: CollectionRepository,
{
    repository: R,
}

impl<R> DeleteCollectionService<R>
where
    R: CollectionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCollectionUseCase for DeleteCollectionService<R>
where
    R: CollectionRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, collection_id: Uuid) -> Result<(), DeleteCollectionError> {
        ensure_owner(&self.repository, actor, collection_id).await?;

        self.repository
            .delete_collection(collection_id)
            .await
            .map_err(|e| match e {
                CollectionRepositoryError::NotFound => DeleteCollectionError::NotFound,
                other => DeleteCollectionError::RepositoryError(other.to_string()),
            })?;

        info!(collection_id = %collection_id, actor_id = %actor.id, "Collection deleted");
        Ok(())
    }
}
