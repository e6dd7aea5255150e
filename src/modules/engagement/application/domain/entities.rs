use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct LikeStatus {
    pub collection_id: Uuid,
    pub liked: bool,
    pub like_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct FollowStatus {
    pub user_id: Uuid,
    pub following: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowDirection {
    /// Users following the subject
    Followers,
    /// Users the subject follows
    Following,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub body: String,
    pub author: UserSummary,
    pub created_at: DateTime<Utc>,
}

/// Who may delete a comment: its author or the collection owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentOwnership {
    pub comment_id: Uuid,
    pub author_id: Uuid,
    pub collection_owner_id: Uuid,
}

/// A click about to be recorded. `collection_id` is only kept when the
/// product really is in that collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClick {
    pub product_id: Uuid,
    pub collection_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub referrer: Option<String>,
}
