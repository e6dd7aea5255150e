use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::modules::auth::application::domain::credentials::normalize_email;
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthOutput, LoginUserError, LoginUserInput, LoginUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery,
};

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, input: LoginUserInput) -> Result<AuthOutput, LoginUserError> {
        // Malformed e-mails and unknown accounts look the same to the caller
        let email = normalize_email(&input.email).map_err(|_| LoginUserError::InvalidCredentials)?;

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| LoginUserError::QueryError(e.to_string()))?
            .ok_or(LoginUserError::InvalidCredentials)?;

        let password_ok = self
            .hasher
            .matches(&input.password, &user.password_hash)
            .await
            .map_err(|e| LoginUserError::HashingFailed(e.to_string()))?;

        if !password_ok {
            debug!(user_id = %user.id, "Password mismatch");
            return Err(LoginUserError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| LoginUserError::TokenFailed(e.to_string()))?;

        Ok(AuthOutput {
            user: user.to_public(),
            access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::UserRole;
    use crate::modules::auth::application::services::test_doubles::{
        sample_user, FakeHasher, FakeTokens, MockUserQuery,
    };

    fn service(query: MockUserQuery) -> LoginUserService<MockUserQuery> {
        LoginUserService::new(query, Arc::new(FakeHasher { fail: false }), Arc::new(FakeTokens))
    }

    fn login(password: &str) -> LoginUserInput {
        LoginUserInput {
            email: "MAYA@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_returns_public_user_and_token() {
        let user = sample_user(UserRole::Brand);
        let user_id = user.id;
        let svc = service(MockUserQuery {
            user: Some(user),
            ..Default::default()
        });

        let out = svc.execute(login("correct-horse")).await.unwrap();

        assert_eq!(out.user.id, user_id);
        assert_eq!(out.access_token, format!("token:{user_id}:BRAND"));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_invalid_credentials() {
        let svc = service(MockUserQuery {
            user: Some(sample_user(UserRole::Shopper)),
            ..Default::default()
        });

        let result = svc.execute(login("wrong-password")).await;

        assert!(matches!(result, Err(LoginUserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_invalid_credentials() {
        let svc = service(MockUserQuery::default());

        let result = svc.execute(login("correct-horse")).await;

        assert!(matches!(result, Err(LoginUserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_malformed_email_is_invalid_credentials() {
        let svc = service(MockUserQuery::default());

        let result = svc
            .execute(LoginUserInput {
                email: "not-an-email".to_string(),
                password: "whatever1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(LoginUserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_query_failure_maps_to_query_error() {
        let svc = service(MockUserQuery {
            fail: true,
            ..Default::default()
        });

        let result = svc.execute(login("correct-horse")).await;

        assert!(matches!(result, Err(LoginUserError::QueryError(_))));
    }
}
