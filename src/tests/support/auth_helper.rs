use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::domain::entities::UserRole;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "stash-test".to_string(),
        access_token_expiry: 3600,
    })
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

/// `Authorization` header value for a freshly signed access token.
pub fn bearer(user_id: Uuid, role: UserRole) -> String {
    let token = test_jwt_service()
        .generate_access_token(user_id, role)
        .expect("test token should sign");
    format!("Bearer {token}")
}
