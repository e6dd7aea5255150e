use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::follows;
use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::engagement::application::domain::entities::FollowDirection;
use crate::modules::engagement::application::ports::outgoing::{
    FollowRepository, FollowRepositoryError,
};
use crate::shared::db::is_foreign_key_violation;
use crate::shared::pagination::{PageRequest, PageResult};

const INSERT_FOLLOW_SQL: &str = r#"
    INSERT INTO follows (follower_id, following_id)
    VALUES ($1, $2)
    ON CONFLICT DO NOTHING
"#;

const FOLLOWERS_SQL: &str = r#"
    SELECT u.id, u.username, u.display_name, u.avatar_url
    FROM follows f
    JOIN users u ON u.id = f.follower_id
    WHERE f.following_id = $1
    ORDER BY f.created_at DESC, u.id
    LIMIT $2 OFFSET $3
"#;

const FOLLOWING_SQL: &str = r#"
    SELECT u.id, u.username, u.display_name, u.avatar_url
    FROM follows f
    JOIN users u ON u.id = f.following_id
    WHERE f.follower_id = $1
    ORDER BY f.created_at DESC, u.id
    LIMIT $2 OFFSET $3
"#;

#[derive(Debug, FromQueryResult)]
struct UserSummaryRow {
    id: Uuid,
    username: String,
    display_name: Option<String>,
    avatar_url: Option<String>,
}

impl From<UserSummaryRow> for UserSummary {
    fn from(row: UserSummaryRow) -> Self {
        UserSummary {
            id: row.id,
            username: row.username,
            display_name: row.display_name,
            avatar_url: row.avatar_url,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FollowRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FollowRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FollowRepository for FollowRepositoryPostgres {
    async fn follow(&self, follower_id: Uuid, following_id: Uuid) -> Result<(), FollowRepositoryError> {
        self.db
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                INSERT_FOLLOW_SQL,
                [follower_id.into(), following_id.into()],
            ))
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    FollowRepositoryError::UserNotFound
                } else {
                    map_db_err(e)
                }
            })?;

        Ok(())
    }

    async fn unfollow(
        &self,
        follower_id: Uuid,
        following_id: Uuid,
    ) -> Result<(), FollowRepositoryError> {
        follows::Entity::delete_many()
            .filter(follows::Column::FollowerId.eq(follower_id))
            .filter(follows::Column::FollowingId.eq(following_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn list(
        &self,
        user_id: Uuid,
        direction: FollowDirection,
        page: PageRequest,
    ) -> Result<PageResult<UserSummary>, FollowRepositoryError> {
        let (key, sql) = match direction {
            FollowDirection::Followers => (follows::Column::FollowingId, FOLLOWERS_SQL),
            FollowDirection::Following => (follows::Column::FollowerId, FOLLOWING_SQL),
        };

        let total = follows::Entity::find()
            .filter(key.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if total == 0 {
            return Ok(PageResult::empty(page));
        }

        let rows = UserSummaryRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            [
                user_id.into(),
                (page.limit() as i64).into(),
                (page.offset() as i64).into(),
            ],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(map_db_err)?;

        Ok(PageResult::new(
            rows.into_iter().map(UserSummary::from).collect(),
            page,
            total,
        ))
    }
}

fn map_db_err(e: DbErr) -> FollowRepositoryError {
    FollowRepositoryError::DatabaseError(e.to_string())
}
