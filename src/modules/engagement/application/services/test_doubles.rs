use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::collection::application::domain::entities::CollectionVisibility;
use crate::modules::engagement::application::domain::entities::{
    Comment, CommentOwnership, FollowDirection, NewClick,
};
use crate::modules::engagement::application::ports::outgoing::{
    CollectionVisibilityQuery, CommentRepository, CommentRepositoryError, FollowRepository,
    FollowRepositoryError, LikeRepository, LikeRepositoryError, TelemetryRepository,
    TelemetryRepositoryError, VisibilityQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub fn sample_summary(id: Uuid, username: &str) -> UserSummary {
    UserSummary {
        id,
        username: username.to_string(),
        display_name: None,
        avatar_url: None,
    }
}

pub fn sample_comment(collection_id: Uuid, author_id: Uuid, body: &str) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        collection_id,
        body: body.to_string(),
        author: sample_summary(author_id, "sam"),
        created_at: Utc::now(),
    }
}

/// `None` means the collection does not exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVisibility(pub Option<CollectionVisibility>);

impl MockVisibility {
    pub fn published() -> Self {
        Self(Some(CollectionVisibility {
            owner_id: Uuid::new_v4(),
            is_published: true,
        }))
    }

    pub fn draft_of(owner_id: Uuid) -> Self {
        Self(Some(CollectionVisibility {
            owner_id,
            is_published: false,
        }))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

#[async_trait]
impl CollectionVisibilityQuery for MockVisibility {
    async fn find_visibility(
        &self,
        _collection_id: Uuid,
    ) -> Result<Option<CollectionVisibility>, VisibilityQueryError> {
        Ok(self.0)
    }
}

#[derive(Default)]
pub struct MockLikeRepository {
    pub likes: Mutex<HashSet<(Uuid, Uuid)>>,
    pub missing_collection: bool,
}

#[async_trait]
impl LikeRepository for MockLikeRepository {
    async fn like(&self, user_id: Uuid, collection_id: Uuid) -> Result<(), LikeRepositoryError> {
        if self.missing_collection {
            return Err(LikeRepositoryError::CollectionNotFound);
        }
        self.likes.lock().unwrap().insert((user_id, collection_id));
        Ok(())
    }

    async fn unlike(&self, user_id: Uuid, collection_id: Uuid) -> Result<(), LikeRepositoryError> {
        if self.missing_collection {
            return Err(LikeRepositoryError::CollectionNotFound);
        }
        self.likes.lock().unwrap().remove(&(user_id, collection_id));
        Ok(())
    }

    async fn count_likes(&self, collection_id: Uuid) -> Result<u64, LikeRepositoryError> {
        let likes = self.likes.lock().unwrap();
        Ok(likes.iter().filter(|(_, c)| *c == collection_id).count() as u64)
    }
}

#[derive(Default)]
pub struct MockFollowRepository {
    pub follows: Mutex<HashSet<(Uuid, Uuid)>>,
    pub missing_user: bool,
}

#[async_trait]
impl FollowRepository for MockFollowRepository {
    async fn follow(&self, follower_id: Uuid, following_id: Uuid) -> Result<(), FollowRepositoryError> {
        if self.missing_user {
            return Err(FollowRepositoryError::UserNotFound);
        }
        self.follows.lock().unwrap().insert((follower_id, following_id));
        Ok(())
    }

    async fn unfollow(
        &self,
        follower_id: Uuid,
        following_id: Uuid,
    ) -> Result<(), FollowRepositoryError> {
        self.follows.lock().unwrap().remove(&(follower_id, following_id));
        Ok(())
    }

    async fn list(
        &self,
        user_id: Uuid,
        direction: FollowDirection,
        page: PageRequest,
    ) -> Result<PageResult<UserSummary>, FollowRepositoryError> {
        let follows = self.follows.lock().unwrap();
        let items: Vec<UserSummary> = follows
            .iter()
            .filter_map(|(follower, following)| match direction {
                FollowDirection::Followers if *following == user_id => Some(*follower),
                FollowDirection::Following if *follower == user_id => Some(*following),
                _ => None,
            })
            .map(|id| sample_summary(id, "someone"))
            .collect();
        let total = items.len() as u64;
        Ok(PageResult::new(items, page, total))
    }
}

#[derive(Default)]
pub struct MockCommentRepository {
    /// `None` means the collection does not exist.
    pub comments: Option<Vec<Comment>>,
    pub ownership: Option<CommentOwnership>,
    pub deleted: Mutex<Option<Uuid>>,
}

#[async_trait]
impl CommentRepository for MockCommentRepository {
    async fn list_for_collection(
        &self,
        _collection_id: Uuid,
    ) -> Result<Option<Vec<Comment>>, CommentRepositoryError> {
        Ok(self.comments.clone())
    }

    async fn create_comment(
        &self,
        author_id: Uuid,
        collection_id: Uuid,
        body: String,
    ) -> Result<Comment, CommentRepositoryError> {
        if self.comments.is_none() {
            return Err(CommentRepositoryError::CollectionNotFound);
        }
        Ok(sample_comment(collection_id, author_id, &body))
    }

    async fn find_ownership(
        &self,
        _comment_id: Uuid,
    ) -> Result<Option<CommentOwnership>, CommentRepositoryError> {
        Ok(self.ownership)
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        *self.deleted.lock().unwrap() = Some(comment_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockTelemetryRepository {
    pub source_url: Option<String>,
    pub in_collection: bool,
    pub missing_collection: bool,
    pub fail_click_insert: bool,
    pub views: Mutex<Vec<(Uuid, Option<Uuid>)>>,
    pub clicks: Mutex<Vec<NewClick>>,
}

#[async_trait]
impl TelemetryRepository for MockTelemetryRepository {
    async fn record_view(
        &self,
        collection_id: Uuid,
        viewer_id: Option<Uuid>,
    ) -> Result<(), TelemetryRepositoryError> {
        if self.missing_collection {
            return Err(TelemetryRepositoryError::CollectionNotFound);
        }
        self.views.lock().unwrap().push((collection_id, viewer_id));
        Ok(())
    }

    async fn product_source_url(
        &self,
        _product_id: Uuid,
    ) -> Result<Option<String>, TelemetryRepositoryError> {
        Ok(self.source_url.clone())
    }

    async fn is_in_collection(
        &self,
        _collection_id: Uuid,
        _product_id: Uuid,
    ) -> Result<bool, TelemetryRepositoryError> {
        Ok(self.in_collection)
    }

    async fn record_click(&self, click: NewClick) -> Result<(), TelemetryRepositoryError> {
        if self.fail_click_insert {
            return Err(TelemetryRepositoryError::DatabaseError("insert failed".to_string()));
        }
        self.clicks.lock().unwrap().push(click);
        Ok(())
    }
}
