use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::collection::application::domain::entities::{
    Collection, CollectionCard, CollectionDetail, FeedSort,
};
use crate::modules::collection::application::domain::ordering::insert_position;
use crate::modules::collection::application::ports::outgoing::{
    CollectionQuery, CollectionQueryError, CollectionRepository, CollectionRepositoryError,
    CreateCollectionData, UpdateCollectionData,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub fn sample_collection(owner_id: Uuid, is_published: bool) -> Collection {
    Collection {
        id: Uuid::new_v4(),
        owner_id,
        title: "Desk setup".to_string(),
        description: None,
        cover_image_url: None,
        is_published,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_owner(id: Uuid) -> UserSummary {
    UserSummary {
        id,
        username: "maya".to_string(),
        display_name: Some("Maya".to_string()),
        avatar_url: None,
    }
}

pub fn sample_card(collection: Collection) -> CollectionCard {
    CollectionCard {
        owner: sample_owner(collection.owner_id),
        collection,
        like_count: 2,
        product_count: 3,
    }
}

#[derive(Default)]
pub struct MockCollectionRepository {
    pub owner: Option<Uuid>,
    pub items: Mutex<Vec<Uuid>>,
    pub error: Option<CollectionRepositoryError>,
    pub created: Mutex<Option<CreateCollectionData>>,
    pub updated: Mutex<Option<UpdateCollectionData>>,
    pub deleted: Mutex<bool>,
}

impl MockCollectionRepository {
    pub fn owned_by(owner: Uuid, items: Vec<Uuid>) -> Self {
        Self {
            owner: Some(owner),
            items: Mutex::new(items),
            ..Default::default()
        }
    }

    fn fail(&self) -> Result<(), CollectionRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CollectionRepository for MockCollectionRepository {
    async fn create_collection(
        &self,
        data: CreateCollectionData,
    ) -> Result<Collection, CollectionRepositoryError> {
        self.fail()?;
        let mut collection = sample_collection(data.owner_id, data.is_published);
        collection.title = data.title.clone();
        collection.description = data.description.clone();
        collection.cover_image_url = data.cover_image_url.clone();
        *self.created.lock().unwrap() = Some(data);
        Ok(collection)
    }

    async fn find_owner(
        &self,
        _collection_id: Uuid,
    ) -> Result<Option<Uuid>, CollectionRepositoryError> {
        Ok(self.owner)
    }

    async fn update_collection(
        &self,
        collection_id: Uuid,
        data: UpdateCollectionData,
    ) -> Result<Collection, CollectionRepositoryError> {
        self.fail()?;
        let mut collection = sample_collection(self.owner.unwrap_or_default(), true);
        collection.id = collection_id;
        if let Some(title) = &data.title {
            collection.title = title.clone();
        }
        if let Some(published) = data.is_published {
            collection.is_published = published;
        }
        *self.updated.lock().unwrap() = Some(data);
        Ok(collection)
    }

    async fn delete_collection(&self, _collection_id: Uuid) -> Result<(), CollectionRepositoryError> {
        self.fail()?;
        *self.deleted.lock().unwrap() = true;
        Ok(())
    }

    async fn item_ids(&self, _collection_id: Uuid) -> Result<Vec<Uuid>, CollectionRepositoryError> {
        Ok(self.items.lock().unwrap().clone())
    }

    async fn add_item(
        &self,
        _collection_id: Uuid,
        product_id: Uuid,
        position: Option<i32>,
    ) -> Result<i32, CollectionRepositoryError> {
        self.fail()?;
        let mut items = self.items.lock().unwrap();
        if items.contains(&product_id) {
            return Err(CollectionRepositoryError::AlreadyInCollection);
        }
        let at = insert_position(items.len(), position);
        items.insert(at as usize, product_id);
        Ok(at)
    }

    async fn remove_item(
        &self,
        _collection_id: Uuid,
        product_id: Uuid,
    ) -> Result<bool, CollectionRepositoryError> {
        self.fail()?;
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|id| *id != product_id);
        Ok(items.len() < before)
    }

    async fn reorder_items(
        &self,
        _collection_id: Uuid,
        product_ids: &[Uuid],
    ) -> Result<(), CollectionRepositoryError> {
        self.fail()?;
        *self.items.lock().unwrap() = product_ids.to_vec();
        Ok(())
    }
}

#[derive(Default)]
pub struct MockCollectionQuery {
    pub detail: Option<CollectionDetail>,
    pub cards: Vec<CollectionCard>,
    pub include_unpublished: Mutex<Option<bool>>,
    pub sort: Mutex<Option<FeedSort>>,
}

#[async_trait]
impl CollectionQuery for MockCollectionQuery {
    async fn find_detail(
        &self,
        _collection_id: Uuid,
    ) -> Result<Option<CollectionDetail>, CollectionQueryError> {
        Ok(self.detail.clone())
    }

    async fn list_published(
        &self,
        sort: FeedSort,
        page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, CollectionQueryError> {
        *self.sort.lock().unwrap() = Some(sort);
        Ok(PageResult::new(self.cards.clone(), page, self.cards.len() as u64))
    }

    async fn list_by_owner(
        &self,
        _owner_id: Uuid,
        include_unpublished: bool,
        page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, CollectionQueryError> {
        *self.include_unpublished.lock().unwrap() = Some(include_unpublished);
        Ok(PageResult::new(self.cards.clone(), page, self.cards.len() as u64))
    }
}
