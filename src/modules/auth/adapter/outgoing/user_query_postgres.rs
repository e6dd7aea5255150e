use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::modules::auth::application::domain::entities::ProfileCounts;
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserQueryResult,
};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_query_result(model: UserModel) -> Result<UserQueryResult, UserQueryError> {
        let role = model
            .parsed_role()
            .map_err(|e| UserQueryError::QueryFailed(e.to_string()))?;

        Ok(UserQueryResult {
            id: model.id,
            email: model.email,
            username: model.username,
            password_hash: model.password_hash,
            role,
            display_name: model.display_name,
            bio: model.bio,
            avatar_url: model.avatar_url,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[derive(Debug, FromQueryResult)]
struct CountsRow {
    followers: i64,
    following: i64,
    collections: i64,
}

const PROFILE_COUNTS_SQL: &str = r#"
    SELECT
        (SELECT COUNT(*) FROM follows WHERE following_id = $1) AS followers,
        (SELECT COUNT(*) FROM follows WHERE follower_id = $1) AS following,
        (SELECT COUNT(*) FROM collections WHERE owner_id = $1 AND is_published = true) AS collections
"#;

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_query_result).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_query_result).transpose()
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_query_result).transpose()
    }

    async fn profile_counts(&self, user_id: Uuid) -> Result<ProfileCounts, UserQueryError> {
        let row = CountsRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            PROFILE_COUNTS_SQL,
            vec![user_id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(row
            .map(|r| ProfileCounts {
                followers: r.followers.max(0) as u64,
                following: r.following.max(0) as u64,
                collections: r.collections.max(0) as u64,
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::UserRole;
    use chrono::Utc;
    use maplit::btreemap;
    use sea_orm::{DbErr, MockDatabase, Value};

    fn create_mock_user_model(id: Uuid, role: &str) -> UserModel {
        let now = Utc::now();
        UserModel {
            id,
            email: "maya@example.com".to_string(),
            username: "maya".to_string(),
            password_hash: "hashed_password".to_string(),
            role: role.to_string(),
            display_name: Some("Maya".to_string()),
            bio: None,
            avatar_url: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_success() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(user_id, "CREATOR")]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_id(user_id).await.unwrap().unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.role, UserRole::Creator);
        assert_eq!(user.username, "maya");
    }

    #[tokio::test]
    async fn test_find_by_email_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_email("nobody@example.com").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_unknown_role_in_row_is_query_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(Uuid::new_v4(), "OWNER")]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_username("maya").await;

        assert!(matches!(result, Err(UserQueryError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn test_find_by_username_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_username("maya").await;

        assert!(matches!(result, Err(UserQueryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_profile_counts_reads_aggregate_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "followers" => Value::BigInt(Some(7)),
                "following" => Value::BigInt(Some(2)),
                "collections" => Value::BigInt(Some(5)),
            }]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let counts = query.profile_counts(Uuid::new_v4()).await.unwrap();

        assert_eq!(
            counts,
            ProfileCounts {
                followers: 7,
                following: 2,
                collections: 5
            }
        );
    }
}
