use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::catalog::application::domain::entities::Product;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CollectionHit {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub owner: UserSummary,
}

/// One list per source, each ordered by its own relevance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct SearchResults {
    pub products: Vec<Product>,
    pub collections: Vec<CollectionHit>,
    pub users: Vec<UserSummary>,
}
