use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::domain::credentials::{
    normalize_email, normalize_username, validate_password,
};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthOutput, RegisterUserError, RegisterUserInput, RegisterUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, TokenProvider, UserRepository, UserRepositoryError,
};

pub struct RegisterUserService<R>
where
    R: UserRepository,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository,
{
    pub fn new(
        repository: R,
        hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<AuthOutput, RegisterUserError> {
        let email = normalize_email(&input.email)
            .map_err(|e| RegisterUserError::InvalidEmail(e.to_string()))?;
        let username = normalize_username(&input.username)
            .map_err(|e| RegisterUserError::InvalidUsername(e.to_string()))?;
        validate_password(&input.password)
            .map_err(|e| RegisterUserError::InvalidPassword(e.to_string()))?;

        let role = input.role.unwrap_or_default();
        if !role.is_self_assignable() {
            return Err(RegisterUserError::RoleNotAllowed(role));
        }

        let password_hash = self
            .hasher
            .hash(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // Uniqueness is left to the database constraints
        let user = self
            .repository
            .create_user(CreateUserData {
                email,
                username,
                password_hash,
                role,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
                UserRepositoryError::UserNotFound => RegisterUserError::RepositoryError(
                    "unexpected not found while creating user".to_string(),
                ),
            })?;

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| RegisterUserError::TokenFailed(e.to_string()))?;

        Ok(AuthOutput { user, access_token })
    }
}
