use async_trait::async_trait;
use std::collections::HashSet;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::collection::application::domain::entities::Collection;
use crate::modules::collection::application::ports::incoming::use_cases::{
    CreateCollectionError, CreateCollectionInput, CreateCollectionUseCase,
};
use crate::modules::collection::application::ports::outgoing::{
    CollectionRepository, CollectionRepositoryError, CreateCollectionData,
};
use crate::shared::text::{optional_http_url, optional_text, required_text};

pub(crate) const MAX_TITLE: usize = 150;
pub(crate) const MAX_DESCRIPTION: usize = 2000;
const MAX_INITIAL_ITEMS: usize = 100;

pub struct CreateCollectionService<R>
where
    R: CollectionRepository,
{
    repository: R,
}

impl<R> CreateCollectionService<R>
where
    R: CollectionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCollectionUseCase for CreateCollectionService<R>
where
    R: CollectionRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        input: CreateCollectionInput,
    ) -> Result<Collection, CreateCollectionError> {
        let title = required_text("title", &input.title, MAX_TITLE)
            .map_err(CreateCollectionError::InvalidInput)?;
        let description = optional_text("description", input.description, MAX_DESCRIPTION)
            .map_err(CreateCollectionError::InvalidInput)?;
        let cover_image_url = optional_http_url("cover_image_url", input.cover_image_url)
            .map_err(CreateCollectionError::InvalidInput)?;

        // First occurrence wins
        let mut seen = HashSet::new();
        let product_ids: Vec<_> = input
            .product_ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        if product_ids.len() > MAX_INITIAL_ITEMS {
            return Err(CreateCollectionError::InvalidInput(format!(
                "at most {MAX_INITIAL_ITEMS} products can be added at creation"
            )));
        }

        self.repository
            .create_collection(CreateCollectionData {
                owner_id: owner.value(),
                title,
                description,
                cover_image_url,
                is_published: input.is_published.unwrap_or(true),
                product_ids,
            })
            .await
            .map_err(|e| match e {
                CollectionRepositoryError::ProductNotFound => {
                    CreateCollectionError::ProductNotFound
                }
                other => CreateCollectionError::RepositoryError(other.to_string()),
            })
    }
}
