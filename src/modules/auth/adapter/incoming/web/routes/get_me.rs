use actix_web::{get, web, Responder};
use tracing::error;

use super::user_dto::UserProfileResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::ports::incoming::use_cases::{
    GetUserProfileError, ProfileLookup,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Profile of the calling user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn get_me_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data
        .auth
        .get_profile
        .execute(ProfileLookup::Id(user.user_id))
        .await
    {
        Ok(profile) => ApiResponse::success(UserProfileResponse::from(profile)),

        // Token outlived the account
        Err(GetUserProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(GetUserProfileError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load caller profile");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::Value;
    use uuid::Uuid;

    use crate::modules::auth::application::domain::entities::UserRole;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;
    use crate::tests::support::send;
    use crate::tests::support::stubs::FixedProfile;

    #[actix_web::test]
    async fn test_me_requires_token() {
        let state = TestAppStateBuilder::default().build();

        let resp = send(state, get_me_handler, test::TestRequest::get().uri("/api/auth/me")).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_me_returns_profile_with_counts() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_get_user_profile(FixedProfile::found(user_id, "maya"))
            .build();

        let resp = send(
            state,
            get_me_handler,
            test::TestRequest::get()
                .uri("/api/auth/me")
                .insert_header(("Authorization", bearer(user_id, UserRole::Creator))),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], user_id.to_string());
        assert_eq!(body["data"]["followers_count"], 3);
    }
}
