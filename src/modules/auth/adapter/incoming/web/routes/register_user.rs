use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::user_dto::UserResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::UserRole;
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthOutput, RegisterUserError, RegisterUserInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "maya@example.com")]
    pub email: String,

    /// 3-30 characters of `[a-z0-9_]`
    #[schema(example = "maya_makes")]
    pub username: String,

    /// At least 8 characters
    #[schema(example = "correct-horse-battery")]
    pub password: String,

    /// SHOPPER (default), CREATOR or BRAND
    pub role: Option<UserRole>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
}

impl From<AuthOutput> for AuthResponse {
    fn from(out: AuthOutput) -> Self {
        Self {
            user: out.user.into(),
            access_token: out.access_token,
            token_type: "Bearer".to_string(),
        }
    }
}

fn map_register_error(err: RegisterUserError, req: &RegisterUserRequest) -> HttpResponse {
    match &err {
        RegisterUserError::InvalidEmail(msg) => ApiResponse::bad_request("INVALID_EMAIL", msg),
        RegisterUserError::InvalidUsername(msg) => {
            ApiResponse::bad_request("INVALID_USERNAME", msg)
        }
        RegisterUserError::InvalidPassword(msg) => {
            ApiResponse::bad_request("INVALID_PASSWORD", msg)
        }
        RegisterUserError::RoleNotAllowed(_) => {
            warn!(username = %req.username, "Attempt to self-assign a privileged role");
            ApiResponse::bad_request("INVALID_ROLE", &err.to_string())
        }
        RegisterUserError::UserAlreadyExists => {
            warn!(username = %req.username, email = %req.email, "User already exists");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }
        RegisterUserError::HashingFailed(_)
        | RegisterUserError::TokenFailed(_)
        | RegisterUserError::RepositoryError(_) => {
            error!(username = %req.username, error = %err, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<AuthResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Email or username taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    info!(username = %req.username, "User registration attempt");

    let input = RegisterUserInput {
        email: req.email.clone(),
        username: req.username.clone(),
        password: req.password.clone(),
        role: req.role,
    };

    match data.auth.register.execute(input).await {
        Ok(out) => {
            info!(user_id = %out.user.id, role = %out.user.role, "User registered");
            ApiResponse::created(AuthResponse::from(out))
        }
        Err(e) => map_register_error(e, &req),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::modules::auth::application::domain::entities::PublicUser;
    use crate::modules::auth::application::ports::incoming::use_cases::RegisterUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::send;

    struct MockRegister {
        result: Result<AuthOutput, RegisterUserError>,
    }

    #[async_trait]
    impl RegisterUserUseCase for MockRegister {
        async fn execute(&self, _input: RegisterUserInput) -> Result<AuthOutput, RegisterUserError> {
            self.result.clone()
        }
    }

    fn output() -> AuthOutput {
        AuthOutput {
            user: PublicUser {
                id: Uuid::new_v4(),
                username: "maya_makes".to_string(),
                role: UserRole::Creator,
                display_name: None,
                bio: None,
                avatar_url: None,
                created_at: Utc::now(),
            },
            access_token: "jwt".to_string(),
        }
    }

    fn body() -> Value {
        json!({
            "email": "maya@example.com",
            "username": "maya_makes",
            "password": "correct-horse",
            "role": "CREATOR"
        })
    }

    #[actix_web::test]
    async fn test_register_success_returns_201_with_token() {
        let state = TestAppStateBuilder::default()
            .with_register_user(MockRegister { result: Ok(output()) })
            .build();

        let resp = send(
            state,
            register_user_handler,
            test::TestRequest::post().uri("/api/auth/register").set_json(body()),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user"]["username"], "maya_makes");
        assert_eq!(body["data"]["user"]["role"], "CREATOR");
        assert_eq!(body["data"]["access_token"], "jwt");
        assert!(body["data"]["user"].get("email").is_none());
    }

    #[actix_web::test]
    async fn test_register_duplicate_returns_409() {
        let state = TestAppStateBuilder::default()
            .with_register_user(MockRegister {
                result: Err(RegisterUserError::UserAlreadyExists),
            })
            .build();

        let resp = send(
            state,
            register_user_handler,
            test::TestRequest::post().uri("/api/auth/register").set_json(body()),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "USER_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_register_admin_role_returns_400() {
        let state = TestAppStateBuilder::default()
            .with_register_user(MockRegister {
                result: Err(RegisterUserError::RoleNotAllowed(UserRole::Admin)),
            })
            .build();

        let resp = send(
            state,
            register_user_handler,
            test::TestRequest::post().uri("/api/auth/register").set_json(json!({
                "email": "a@example.com",
                "username": "root_user",
                "password": "correct-horse",
                "role": "ADMIN"
            })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_ROLE");
    }

    #[actix_web::test]
    async fn test_register_unknown_role_is_validation_error() {
        let state = TestAppStateBuilder::default().build();

        let resp = send(
            state,
            register_user_handler,
            test::TestRequest::post().uri("/api/auth/register").set_json(json!({
                "email": "a@example.com",
                "username": "someone",
                "password": "correct-horse",
                "role": "OWNER"
            })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_register_repository_error_returns_500() {
        let state = TestAppStateBuilder::default()
            .with_register_user(MockRegister {
                result: Err(RegisterUserError::RepositoryError("db down".to_string())),
            })
            .build();

        let resp = send(
            state,
            register_user_handler,
            test::TestRequest::post().uri("/api/auth/register").set_json(body()),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
