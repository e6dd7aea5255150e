use actix_web::{delete, get, patch, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::{
    resolve_user_id_or_response, AuthenticatedUser, OptionalUser,
};
use crate::modules::auth::application::domain::entities::UserRole;
use crate::modules::collection::application::domain::entities::{
    Collection, CollectionCard, CollectionDetail, FeedSort,
};
use crate::modules::collection::application::ports::incoming::use_cases::{
    CreateCollectionError, CreateCollectionInput, DeleteCollectionError, GetCollectionError,
    ListCollectionsError, UpdateCollectionError, UpdateCollectionInput,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCollectionRequest {
    #[schema(example = "Small-space desk setup")]
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    /// Defaults to true
    pub is_published: Option<bool>,
    /// Initial items, stored in this order
    #[serde(default)]
    pub product_ids: Vec<Uuid>,
}

impl From<CreateCollectionRequest> for CreateCollectionInput {
    fn from(req: CreateCollectionRequest) -> Self {
        CreateCollectionInput {
            title: req.title,
            description: req.description,
            cover_image_url: req.cover_image_url,
            is_published: req.is_published,
            product_ids: req.product_ids,
        }
    }
}

/// Omitted keys are kept, `null` clears, a value replaces.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCollectionRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub cover_image_url: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_published: PatchField<bool>,
}

impl From<UpdateCollectionRequest> for UpdateCollectionInput {
    fn from(req: UpdateCollectionRequest) -> Self {
        UpdateCollectionInput {
            title: req.title,
            description: req.description,
            cover_image_url: req.cover_image_url,
            is_published: req.is_published,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListCollectionsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// `newest` (default) or `popular`
    #[serde(default)]
    pub sort: FeedSort,
}

impl ListCollectionsQuery {
    fn page(&self) -> PageRequest {
        PageRequest::from_query(self.page, self.per_page)
    }
}

fn not_owner() -> actix_web::HttpResponse {
    ApiResponse::forbidden("NOT_OWNER", "Only the collection owner can do this")
}

fn collection_not_found() -> actix_web::HttpResponse {
    ApiResponse::not_found("COLLECTION_NOT_FOUND", "Collection not found")
}

/// Create a collection
#[utoipa::path(
    post,
    path = "/api/collections",
    tag = "collections",
    security(("bearer_auth" = [])),
    request_body = CreateCollectionRequest,
    responses(
        (status = 201, description = "Collection created", body = inline(SuccessResponse<Collection>)),
        (status = 400, description = "Invalid input or unknown product", body = ErrorResponse),
        (status = 403, description = "Caller is not a creator", body = ErrorResponse),
    )
)]
#[post("/api/collections")]
pub async fn create_collection_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateCollectionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(denied) = user.require_role(&[UserRole::Creator]) {
        return denied;
    }

    match data
        .collection
        .create
        .execute(user.user_id, req.into_inner().into())
        .await
    {
        Ok(collection) => ApiResponse::created(collection),
        Err(CreateCollectionError::InvalidInput(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(e @ CreateCollectionError::ProductNotFound) => {
            ApiResponse::bad_request("PRODUCT_NOT_FOUND", &e.to_string())
        }
        Err(CreateCollectionError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create collection");
            ApiResponse::internal_error()
        }
    }
}

/// Collection with owner, counts and ordered items
#[utoipa::path(
    get,
    path = "/api/collections/{collection_id}",
    tag = "collections",
    params(("collection_id" = Uuid, Path, description = "Collection id")),
    responses(
        (status = 200, description = "Collection", body = inline(SuccessResponse<CollectionDetail>)),
        (status = 404, description = "Missing, or unpublished and not yours", body = ErrorResponse),
    )
)]
#[get("/api/collections/{collection_id}")]
pub async fn get_collection_handler(
    viewer: OptionalUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection_id = path.into_inner();

    match data
        .collection
        .get
        .execute(collection_id, viewer.actor())
        .await
    {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetCollectionError::NotFound) => collection_not_found(),
        Err(GetCollectionError::QueryError(e)) => {
            error!(collection_id = %collection_id, error = %e, "Failed to load collection");
            ApiResponse::internal_error()
        }
    }
}

/// Public feed of published collections
#[utoipa::path(
    get,
    path = "/api/collections",
    tag = "collections",
    params(ListCollectionsQuery),
    responses(
        (status = 200, description = "Feed page", body = inline(SuccessResponse<PageResult<CollectionCard>>)),
        (status = 400, description = "Bad query string", body = ErrorResponse),
    )
)]
#[get("/api/collections")]
pub async fn list_collections_handler(
    query: web::Query<ListCollectionsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    match data.collection.feed.execute(query.sort, query.page()).await {
        Ok(page) => ApiResponse::success(page),
        Err(ListCollectionsError::QueryError(e)) => {
            error!(error = %e, "Failed to list collections");
            ApiResponse::internal_error()
        }
    }
}

/// A user's collections; drafts are listed only for the owner
#[utoipa::path(
    get,
    path = "/api/users/{username}/collections",
    tag = "collections",
    params(
        ("username" = String, Path, description = "Username"),
        ListCollectionsQuery,
    ),
    responses(
        (status = 200, description = "Collections page", body = inline(SuccessResponse<PageResult<CollectionCard>>)),
        (status = 404, description = "Unknown username", body = ErrorResponse),
    )
)]
#[get("/api/users/{username}/collections")]
pub async fn list_user_collections_handler(
    viewer: OptionalUser,
    path: web::Path<String>,
    query: web::Query<ListCollectionsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    let owner = match resolve_user_id_or_response(&data, &username).await {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data
        .collection
        .list_by_user
        .execute(owner, viewer.user_id(), query.page())
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(ListCollectionsError::QueryError(e)) => {
            error!(username = %username, error = %e, "Failed to list user collections");
            ApiResponse::internal_error()
        }
    }
}

/// Update collection fields
#[utoipa::path(
    patch,
    path = "/api/collections/{collection_id}",
    tag = "collections",
    security(("bearer_auth" = [])),
    params(("collection_id" = Uuid, Path, description = "Collection id")),
    request_body = UpdateCollectionRequest,
    responses(
        (status = 200, description = "Updated collection", body = inline(SuccessResponse<Collection>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Collection not found", body = ErrorResponse),
    )
)]
#[patch("/api/collections/{collection_id}")]
pub async fn update_collection_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCollectionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection_id = path.into_inner();

    match data
        .collection
        .update
        .execute(user.actor(), collection_id, req.into_inner().into())
        .await
    {
        Ok(collection) => ApiResponse::success(collection),
        Err(UpdateCollectionError::InvalidInput(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(UpdateCollectionError::NotFound) => collection_not_found(),
        Err(UpdateCollectionError::NotOwner) => {
            warn!(user_id = %user.user_id, collection_id = %collection_id, "Update of a foreign collection");
            not_owner()
        }
        Err(UpdateCollectionError::RepositoryError(e)) => {
            error!(collection_id = %collection_id, error = %e, "Failed to update collection");
            ApiResponse::internal_error()
        }
    }
}

/// Delete a collection with its items, likes and comments
#[utoipa::path(
    delete,
    path = "/api/collections/{collection_id}",
    tag = "collections",
    security(("bearer_auth" = [])),
    params(("collection_id" = Uuid, Path, description = "Collection id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Collection not found", body = ErrorResponse),
    )
)]
#[delete("/api/collections/{collection_id}")]
pub async fn delete_collection_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection_id = path.into_inner();

    match data
        .collection
        .delete
        .execute(user.actor(), collection_id)
        .await
    {
        Ok(()) => {
            info!(collection_id = %collection_id, "Collection deleted via API");
            ApiResponse::no_content()
        }
        Err(DeleteCollectionError::NotFound) => collection_not_found(),
        Err(DeleteCollectionError::NotOwner) => not_owner(),
        Err(DeleteCollectionError::RepositoryError(e)) => {
            error!(collection_id = %collection_id, error = %e, "Failed to delete collection");
            ApiResponse::internal_error()
        }
    }
}
