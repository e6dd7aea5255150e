use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Actor, UserSummary};
use crate::modules::catalog::application::domain::entities::Product;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Collection {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    pub fn visibility(&self) -> CollectionVisibility {
        CollectionVisibility {
            owner_id: self.owner_id,
            is_published: self.is_published,
        }
    }
}

/// The two columns that decide who may see a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionVisibility {
    pub owner_id: Uuid,
    pub is_published: bool,
}

impl CollectionVisibility {
    /// Drafts are visible to their owner and to admins; everyone else gets
    /// the same answer as for a missing collection.
    pub fn visible_to(&self, viewer: Option<Actor>) -> bool {
        self.is_published || viewer.is_some_and(|actor| actor.can_manage(Some(self.owner_id)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CollectionItem {
    /// 0-based display position
    pub position: i32,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CollectionDetail {
    #[serde(flatten)]
    pub collection: Collection,
    pub owner: UserSummary,
    pub like_count: u64,
    pub comment_count: u64,
    pub items: Vec<CollectionItem>,
}

/// Feed and profile listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CollectionCard {
    #[serde(flatten)]
    pub collection: Collection,
    pub owner: UserSummary,
    pub like_count: u64,
    pub product_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedSort {
    #[default]
    Newest,
    /// Like count, newest first on ties
    Popular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ItemPlacement {
    pub collection_id: Uuid,
    pub product_id: Uuid,
    pub position: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{UserId, UserRole};

    fn actor(id: Uuid, role: UserRole) -> Actor {
        Actor::new(UserId::from(id), role)
    }

    #[test]
    fn test_draft_visible_to_owner_and_admin_only() {
        let owner = Uuid::new_v4();
        let draft = CollectionVisibility {
            owner_id: owner,
            is_published: false,
        };

        assert!(draft.visible_to(Some(actor(owner, UserRole::Creator))));
        assert!(draft.visible_to(Some(actor(Uuid::new_v4(), UserRole::Admin))));
        assert!(!draft.visible_to(Some(actor(Uuid::new_v4(), UserRole::Creator))));
        assert!(!draft.visible_to(None));
    }

    #[test]
    fn test_published_visible_to_anyone() {
        let published = CollectionVisibility {
            owner_id: Uuid::new_v4(),
            is_published: true,
        };

        assert!(published.visible_to(None));
    }
}
