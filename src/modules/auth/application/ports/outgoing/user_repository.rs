use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{PublicUser, UserRole};
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Unset keeps the column, Null clears it, Value replaces it.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileData {
    pub display_name: PatchField<String>,
    pub bio: PatchField<String>,
    pub avatar_url: PatchField<String>,
}

impl UpdateProfileData {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_unset() && self.bio.is_unset() && self.avatar_url.is_unset()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<PublicUser, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<PublicUser, UserRepositoryError>;
}
