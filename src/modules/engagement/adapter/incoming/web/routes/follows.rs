use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::{
    resolve_user_id_or_response, AuthenticatedUser,
};
use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::engagement::application::domain::entities::{FollowDirection, FollowStatus};
use crate::modules::engagement::application::ports::incoming::use_cases::{
    FollowUserError, ListFollowsError,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FollowListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

fn follow_response(
    username: &str,
    result: Result<FollowStatus, FollowUserError>,
) -> HttpResponse {
    match result {
        Ok(status) => ApiResponse::success(status),
        Err(e @ FollowUserError::SelfFollow) => {
            ApiResponse::bad_request("SELF_FOLLOW", &e.to_string())
        }
        Err(FollowUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FollowUserError::RepositoryError(e)) => {
            error!(username = %username, error = %e, "Failed to update follow");
            ApiResponse::internal_error()
        }
    }
}

/// Follow a user (idempotent)
#[utoipa::path(
    post,
    path = "/api/users/{username}/follow",
    tag = "engagement",
    security(("bearer_auth" = [])),
    params(("username" = String, Path, description = "User to follow")),
    responses(
        (status = 200, description = "Following", body = inline(SuccessResponse<FollowStatus>)),
        (status = 400, description = "Cannot follow yourself", body = ErrorResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse),
    )
)]
#[post("/api/users/{username}/follow")]
pub async fn follow_user_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();
    let target = match resolve_user_id_or_response(&data, &username).await {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let result = data.engagement.follow.execute(user.user_id, target).await;
    follow_response(&username, result)
}

/// Stop following a user (idempotent)
#[utoipa::path(
    delete,
    path = "/api/users/{username}/follow",
    tag = "engagement",
    security(("bearer_auth" = [])),
    params(("username" = String, Path, description = "User to unfollow")),
    responses(
        (status = 200, description = "Not following", body = inline(SuccessResponse<FollowStatus>)),
        (status = 400, description = "Cannot unfollow yourself", body = ErrorResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse),
    )
)]
#[delete("/api/users/{username}/follow")]
pub async fn unfollow_user_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();
    let target = match resolve_user_id_or_response(&data, &username).await {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let result = data.engagement.unfollow.execute(user.user_id, target).await;
    follow_response(&username, result)
}

async fn list_follows(
    data: web::Data<AppState>,
    username: String,
    direction: FollowDirection,
    query: FollowListQuery,
) -> HttpResponse {
    let user_id = match resolve_user_id_or_response(&data, &username).await {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let page = PageRequest::from_query(query.page, query.per_page);

    match data
        .engagement
        .list_follows
        .execute(user_id, direction, page)
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(ListFollowsError::RepositoryError(e)) => {
            error!(username = %username, error = %e, "Failed to list follows");
            ApiResponse::internal_error()
        }
    }
}

/// Users following `username`, newest first
#[utoipa::path(
    get,
    path = "/api/users/{username}/followers",
    tag = "engagement",
    params(("username" = String, Path, description = "Username"), FollowListQuery),
    responses(
        (status = 200, description = "Followers page", body = inline(SuccessResponse<PageResult<UserSummary>>)),
        (status = 404, description = "Unknown username", body = ErrorResponse),
    )
)]
#[get("/api/users/{username}/followers")]
pub async fn list_followers_handler(
    path: web::Path<String>,
    query: web::Query<FollowListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list_follows(data, path.into_inner(), FollowDirection::Followers, query.into_inner()).await
}

/// Users `username` follows, newest first
#[utoipa::path(
    get,
    path = "/api/users/{username}/following",
    tag = "engagement",
    params(("username" = String, Path, description = "Username"), FollowListQuery),
    responses(
        (status = 200, description = "Following page", body = inline(SuccessResponse<PageResult<UserSummary>>)),
        (status = 404, description = "Unknown username", body = ErrorResponse),
    )
)]
#[get("/api/users/{username}/following")]
pub async fn list_following_handler(
    path: web::Path<String>,
    query: web::Query<FollowListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list_follows(data, path.into_inner(), FollowDirection::Following, query.into_inner()).await
}
