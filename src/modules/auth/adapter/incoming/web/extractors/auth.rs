use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::auth::application::domain::entities::{Actor, UserId, UserRole};
use crate::modules::auth::application::helpers::ResolveUserIdError;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Caller identified by a valid access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }

    /// 403 unless the caller has one of `allowed` (ADMIN always passes).
    pub fn require_role(&self, allowed: &[UserRole]) -> Result<(), HttpResponse> {
        if self.role.satisfies(allowed) {
            return Ok(());
        }

        let names: Vec<&str> = allowed.iter().map(UserRole::as_str).collect();
        Err(ApiResponse::forbidden(
            "FORBIDDEN_ROLE",
            &format!("This action requires role {}", names.join(" or ")),
        ))
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn token_provider(req: &HttpRequest) -> Option<&web::Data<Arc<dyn TokenProvider + Send + Sync>>> {
    req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(provider) = token_provider(req) else {
            tracing::error!("TokenProvider missing from app data");
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))));
        };

        match provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: UserId::from(claims.sub),
                role: claims.role,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// Identity when a usable token is present, anonymous otherwise. A stale or
/// garbled token downgrades to anonymous instead of failing public routes.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl OptionalUser {
    pub fn user_id(&self) -> Option<UserId> {
        self.0.as_ref().map(|u| u.user_id)
    }

    pub fn actor(&self) -> Option<Actor> {
        self.0.as_ref().map(AuthenticatedUser::actor)
    }
}

impl FromRequest for OptionalUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if extract_token_from_header(req).is_none() {
            return ready(Ok(OptionalUser(None)));
        }

        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) => ready(Ok(OptionalUser(Some(user)))),
            Err(_) => ready(Ok(OptionalUser(None))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub async fn resolve_user_id_or_response(
    data: &web::Data<AppState>,
    username: &str,
) -> Result<UserId, HttpResponse> {
    match data.user_identity_resolver.by_username(username).await {
        Ok(user_id) => Ok(user_id),

        Err(ResolveUserIdError::UnknownUsername(_)) => {
            Err(ApiResponse::not_found("USER_NOT_FOUND", "User not found"))
        }

        Err(ResolveUserIdError::Lookup(msg)) => {
            tracing::error!(username = %username, error = %msg, "Failed to resolve username");
            Err(ApiResponse::internal_error())
        }
    }
}
