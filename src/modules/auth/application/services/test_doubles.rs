//! Hand-written port doubles shared by the auth service tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{
    ProfileCounts, PublicUser, UserRole,
};
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, TokenClaims, TokenError, TokenProvider,
    UpdateProfileData, UserQuery, UserQueryError, UserQueryResult, UserRepository,
    UserRepositoryError,
};

pub fn sample_user(role: UserRole) -> UserQueryResult {
    UserQueryResult {
        id: Uuid::new_v4(),
        email: "maya@example.com".to_string(),
        username: "maya".to_string(),
        password_hash: "hashed:correct-horse".to_string(),
        role,
        display_name: Some("Maya".to_string()),
        bio: None,
        avatar_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Prefixes the password with `hashed:`; verification checks the prefix.
pub struct FakeHasher {
    pub fail: bool,
}

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash(&self, password: &str) -> Result<String, HashError> {
        if self.fail {
            return Err(HashError::Hash("forced".to_string()));
        }
        Ok(format!("hashed:{password}"))
    }

    async fn matches(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if self.fail {
            return Err(HashError::MalformedHash);
        }
        Ok(hash == format!("hashed:{password}"))
    }
}

pub struct FakeTokens;

impl TokenProvider for FakeTokens {
    fn generate_access_token(&self, user_id: Uuid, role: UserRole) -> Result<String, TokenError> {
        Ok(format!("token:{user_id}:{role}"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        unimplemented!("not used in service tests")
    }
}

#[derive(Default)]
pub struct MockUserQuery {
    pub user: Option<UserQueryResult>,
    pub counts: ProfileCounts,
    pub fail: bool,
}

impl MockUserQuery {
    fn result(&self) -> Result<Option<UserQueryResult>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("connection lost".to_string()));
        }
        Ok(self.user.clone())
    }
}

#[async_trait]
impl UserQuery for MockUserQuery {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.result()
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.result()
    }

    async fn find_by_username(
        &self,
        _username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.result()
    }

    async fn profile_counts(&self, _user_id: Uuid) -> Result<ProfileCounts, UserQueryError> {
        Ok(self.counts)
    }
}

/// Records the last create/update call so tests can assert on normalized input.
#[derive(Default)]
pub struct MockUserRepository {
    pub error: Option<UserRepositoryError>,
    pub created: Mutex<Option<CreateUserData>>,
    pub updated: Mutex<Option<UpdateProfileData>>,
}

impl MockUserRepository {
    pub fn failing(error: UserRepositoryError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create_user(&self, data: CreateUserData) -> Result<PublicUser, UserRepositoryError> {
        if let Some(e) = &self.error {
            return Err(e.clone());
        }
        let user = PublicUser {
            id: Uuid::new_v4(),
            username: data.username.clone(),
            role: data.role,
            display_name: None,
            bio: None,
            avatar_url: None,
            created_at: Utc::now(),
        };
        *self.created.lock().unwrap() = Some(data);
        Ok(user)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<PublicUser, UserRepositoryError> {
        if let Some(e) = &self.error {
            return Err(e.clone());
        }
        let user = PublicUser {
            id: user_id,
            username: "maya".to_string(),
            role: UserRole::Creator,
            display_name: data.display_name.as_value().cloned(),
            bio: data.bio.as_value().cloned(),
            avatar_url: data.avatar_url.as_value().cloned(),
            created_at: Utc::now(),
        };
        *self.updated.lock().unwrap() = Some(data);
        Ok(user)
    }
}
