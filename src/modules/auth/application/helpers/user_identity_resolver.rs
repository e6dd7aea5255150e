use std::sync::Arc;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveUserIdError {
    #[error("No user named '{0}'")]
    UnknownUsername(String),

    #[error("Username lookup failed: {0}")]
    Lookup(String),
}

/// Maps the `{username}` path segment used by follow and listing routes to
/// the id those modules store.
#[derive(Clone)]
pub struct UserIdentityResolver {
    users: Arc<dyn UserQuery + Send + Sync>,
}

impl UserIdentityResolver {
    pub fn new(users: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { users }
    }

    /// Usernames are stored lower-case, so the segment is normalized first.
    /// A blank segment never reaches the database.
    pub async fn by_username(&self, username: &str) -> Result<UserId, ResolveUserIdError> {
        let normalized = username.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ResolveUserIdError::UnknownUsername(normalized));
        }

        self.users
            .find_by_username(&normalized)
            .await
            .map_err(|e| ResolveUserIdError::Lookup(e.to_string()))?
            .map(|row| UserId::from(row.id))
            .ok_or(ResolveUserIdError::UnknownUsername(normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::modules::auth::application::domain::entities::UserRole;
    use crate::modules::auth::application::services::test_doubles::{sample_user, MockUserQuery};
    use crate::tests::support::stubs::KnownUser;

    #[tokio::test]
    async fn test_resolves_mixed_case_segment() {
        let id = Uuid::new_v4();
        let resolver = UserIdentityResolver::new(Arc::new(KnownUser::named(id, "maya")));

        let resolved = resolver.by_username("  Maya ").await.unwrap();

        assert_eq!(resolved, UserId::from(id));
    }

    #[tokio::test]
    async fn test_unknown_and_blank_usernames() {
        let resolver = UserIdentityResolver::new(Arc::new(KnownUser::nobody()));

        assert!(matches!(
            resolver.by_username("ghost").await,
            Err(ResolveUserIdError::UnknownUsername(name)) if name == "ghost"
        ));
        assert!(matches!(
            resolver.by_username("   ").await,
            Err(ResolveUserIdError::UnknownUsername(_))
        ));
    }

    #[tokio::test]
    async fn test_query_failure_is_lookup_error() {
        let resolver = UserIdentityResolver::new(Arc::new(MockUserQuery {
            user: Some(sample_user(UserRole::Creator)),
            fail: true,
            ..Default::default()
        }));

        let result = resolver.by_username("maya").await;

        assert!(matches!(result, Err(ResolveUserIdError::Lookup(msg)) if msg.contains("connection lost")));
    }
}
