use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{PublicUser, UserId};
use crate::modules::auth::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    UpdateProfileData, UserRepository, UserRepositoryError,
};
use crate::shared::url::is_http_url;

const DISPLAY_NAME_MAX: usize = 60;
const BIO_MAX: usize = 500;

pub struct UpdateProfileService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn normalize(data: UpdateProfileData) -> Result<UpdateProfileData, UpdateProfileError> {
    let display_name = data.display_name.map(|v| v.trim().to_string());
    if let Some(name) = display_name.as_value() {
        if name.is_empty() || name.chars().count() > DISPLAY_NAME_MAX {
            return Err(UpdateProfileError::InvalidInput(format!(
                "display_name must be 1-{DISPLAY_NAME_MAX} characters"
            )));
        }
    }

    let bio = data.bio.map(|v| v.trim().to_string());
    if bio.as_value().is_some_and(|b| b.chars().count() > BIO_MAX) {
        return Err(UpdateProfileError::InvalidInput(format!(
            "bio must be at most {BIO_MAX} characters"
        )));
    }

    let avatar_url = data.avatar_url.map(|v| v.trim().to_string());
    if avatar_url.as_value().is_some_and(|u| !is_http_url(u)) {
        return Err(UpdateProfileError::InvalidInput(
            "avatar_url must be an http(s) URL".to_string(),
        ));
    }

    Ok(UpdateProfileData {
        display_name,
        bio,
        avatar_url,
    })
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        data: UpdateProfileData,
    ) -> Result<PublicUser, UpdateProfileError> {
        let data = normalize(data)?;

        self.repository
            .update_profile(user_id.value(), data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::NotFound,
                UserRepositoryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
                UserRepositoryError::UserAlreadyExists => UpdateProfileError::RepositoryError(
                    "unexpected conflict while updating profile".to_string(),
                ),
            })
    }
}
