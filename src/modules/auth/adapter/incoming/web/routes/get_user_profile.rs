use actix_web::{get, web, Responder};
use tracing::error;

use super::user_dto::UserProfileResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::{
    GetUserProfileError, ProfileLookup,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public profile with follower, following and collection counts
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Public profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 404, description = "Unknown username", body = ErrorResponse),
    )
)]
#[get("/api/users/{username}")]
pub async fn get_user_profile_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data
        .auth
        .get_profile
        .execute(ProfileLookup::Username(username.clone()))
        .await
    {
        Ok(profile) => ApiResponse::success(UserProfileResponse::from(profile)),
        Err(GetUserProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetUserProfileError::QueryError(e)) => {
            error!(username = %username, error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
