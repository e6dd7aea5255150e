use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::incoming::use_cases::{
    GetUserProfileError, GetUserProfileUseCase, ProfileLookup,
};
use crate::modules::auth::application::ports::outgoing::UserQuery;

pub struct GetUserProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> GetUserProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserProfileUseCase for GetUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, lookup: ProfileLookup) -> Result<UserProfile, GetUserProfileError> {
        let found = match &lookup {
            ProfileLookup::Id(id) => self.query.find_by_id(id.value()).await,
            ProfileLookup::Username(name) => {
                self.query.find_by_username(&name.trim().to_lowercase()).await
            }
        }
        .map_err(|e| GetUserProfileError::QueryError(e.to_string()))?
        .ok_or(GetUserProfileError::NotFound)?;

        let counts = self
            .query
            .profile_counts(found.id)
            .await
            .map_err(|e| GetUserProfileError::QueryError(e.to_string()))?;

        Ok(UserProfile {
            user: found.to_public(),
            counts,
        })
    }
}
