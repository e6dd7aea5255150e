use actix_web::{delete, get, post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::{
    AuthenticatedUser, OptionalUser,
};
use crate::modules::engagement::application::domain::entities::Comment;
use crate::modules::engagement::application::ports::incoming::use_cases::{
    AddCommentError, DeleteCommentError, ListCommentsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    /// 1 to 2000 characters after trimming
    pub body: String,
}

/// Comments on a collection, oldest first. Drafts are visible to their owner only.
#[utoipa::path(
    get,
    path = "/api/collections/{collection_id}/comments",
    tag = "engagement",
    params(("collection_id" = Uuid, Path, description = "Collection id")),
    responses(
        (status = 200, description = "Comments", body = inline(SuccessResponse<Vec<Comment>>)),
        (status = 404, description = "Collection not found", body = ErrorResponse),
    )
)]
#[get("/api/collections/{collection_id}/comments")]
pub async fn list_comments_handler(
    viewer: OptionalUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection_id = path.into_inner();

    match data
        .engagement
        .list_comments
        .execute(collection_id, viewer.actor())
        .await
    {
        Ok(comments) => ApiResponse::success(comments),
        Err(ListCommentsError::NotFound) => {
            ApiResponse::not_found("COLLECTION_NOT_FOUND", "Collection not found")
        }
        Err(ListCommentsError::RepositoryError(e)) => {
            error!(collection_id = %collection_id, error = %e, "Failed to list comments");
            ApiResponse::internal_error()
        }
    }
}

/// Comment on a collection
#[utoipa::path(
    post,
    path = "/api/collections/{collection_id}/comments",
    tag = "engagement",
    security(("bearer_auth" = [])),
    params(("collection_id" = Uuid, Path, description = "Collection id")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = inline(SuccessResponse<Comment>)),
        (status = 400, description = "Empty or too long", body = ErrorResponse),
        (status = 404, description = "Collection not found", body = ErrorResponse),
    )
)]
#[post("/api/collections/{collection_id}/comments")]
pub async fn add_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection_id = path.into_inner();

    match data
        .engagement
        .add_comment
        .execute(user.actor(), collection_id, &req.body)
        .await
    {
        Ok(comment) => ApiResponse::created(comment),
        Err(AddCommentError::InvalidBody(msg)) => ApiResponse::bad_request("INVALID_COMMENT", &msg),
        Err(AddCommentError::NotFound) => {
            ApiResponse::not_found("COLLECTION_NOT_FOUND", "Collection not found")
        }
        Err(AddCommentError::RepositoryError(e)) => {
            error!(collection_id = %collection_id, error = %e, "Failed to add comment");
            ApiResponse::internal_error()
        }
    }
}

/// Delete a comment (author, collection owner or admin)
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = "engagement",
    security(("bearer_auth" = [])),
    params(("comment_id" = Uuid, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Not allowed", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
    )
)]
#[delete("/api/comments/{comment_id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let comment_id = path.into_inner();

    match data
        .engagement
        .delete_comment
        .execute(user.actor(), comment_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCommentError::NotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        Err(e @ DeleteCommentError::Forbidden) => {
            ApiResponse::forbidden("NOT_COMMENT_OWNER", &e.to_string())
        }
        Err(DeleteCommentError::RepositoryError(e)) => {
            error!(comment_id = %comment_id, error = %e, "Failed to delete comment");
            ApiResponse::internal_error()
        }
    }
}
