use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::user_dto::UserResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::ports::incoming::use_cases::UpdateProfileError;
use crate::modules::auth::application::ports::outgoing::UpdateProfileData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

/// Omitted keys are kept, `null` clears, a value replaces.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub display_name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub bio: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub avatar_url: PatchField<String>,
}

impl From<UpdateProfileRequest> for UpdateProfileData {
    fn from(req: UpdateProfileRequest) -> Self {
        UpdateProfileData {
            display_name: req.display_name,
            bio: req.bio,
            avatar_url: req.avatar_url,
        }
    }
}

/// Update the caller's profile fields
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserResponse>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[patch("/api/users/me")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .auth
        .update_profile
        .execute(user.user_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(UserResponse::from(updated)),
        Err(UpdateProfileError::InvalidInput(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to update profile");
            ApiResponse::internal_error()
        }
    }
}
