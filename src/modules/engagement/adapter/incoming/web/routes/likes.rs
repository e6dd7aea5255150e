use actix_web::{delete, post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::engagement::application::domain::entities::LikeStatus;
use crate::modules::engagement::application::ports::incoming::use_cases::LikeCollectionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn respond(collection_id: Uuid, result: Result<LikeStatus, LikeCollectionError>) -> HttpResponse {
    match result {
        Ok(status) => ApiResponse::success(status),
        Err(LikeCollectionError::NotFound) => {
            ApiResponse::not_found("COLLECTION_NOT_FOUND", "Collection not found")
        }
        Err(LikeCollectionError::RepositoryError(e)) => {
            error!(collection_id = %collection_id, error = %e, "Failed to update like");
            ApiResponse::internal_error()
        }
    }
}

/// Like a collection (idempotent)
#[utoipa::path(
    post,
    path = "/api/collections/{collection_id}/like",
    tag = "engagement",
    security(("bearer_auth" = [])),
    params(("collection_id" = Uuid, Path, description = "Collection id")),
    responses(
        (status = 200, description = "Liked", body = inline(SuccessResponse<LikeStatus>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Collection not found", body = ErrorResponse),
    )
)]
#[post("/api/collections/{collection_id}/like")]
pub async fn like_collection_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection_id = path.into_inner();
    let result = data.engagement.like.execute(user.actor(), collection_id).await;
    respond(collection_id, result)
}

/// Remove a like (idempotent)
#[utoipa::path(
    delete,
    path = "/api/collections/{collection_id}/like",
    tag = "engagement",
    security(("bearer_auth" = [])),
    params(("collection_id" = Uuid, Path, description = "Collection id")),
    responses(
        (status = 200, description = "Unliked", body = inline(SuccessResponse<LikeStatus>)),
        (status = 404, description = "Collection not found", body = ErrorResponse),
    )
)]
#[delete("/api/collections/{collection_id}/like")]
pub async fn unlike_collection_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection_id = path.into_inner();
    let result = data
        .engagement
        .unlike
        .execute(user.actor(), collection_id)
        .await;
    respond(collection_id, result)
}
