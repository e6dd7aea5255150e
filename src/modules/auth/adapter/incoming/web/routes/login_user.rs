use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::register_user::AuthResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginUserError, LoginUserInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "maya@example.com")]
    pub email: String,
    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

/// Exchange credentials for an access token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = inline(SuccessResponse<AuthResponse>)),
        (status = 401, description = "Wrong email or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let result = data
        .auth
        .login
        .execute(LoginUserInput {
            email: req.email.clone(),
            password: req.password,
        })
        .await;

    match result {
        Ok(out) => {
            info!(user_id = %out.user.id, "User logged in");
            ApiResponse::success(AuthResponse::from(out))
        }
        Err(LoginUserError::InvalidCredentials) => {
            warn!(email = %req.email, "Failed login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(e) => {
            error!(email = %req.email, error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
