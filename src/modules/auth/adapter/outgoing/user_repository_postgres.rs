use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{self, ActiveModel, Column, Entity};
use crate::modules::auth::application::domain::entities::PublicUser;
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, UpdateProfileData, UserRepository, UserRepositoryError,
};
use crate::shared::db::is_unique_violation;
use crate::shared::patch::PatchField;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<PublicUser, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            username: Set(data.username),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            display_name: Set(None),
            bio: Set(None),
            avatar_url: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_err)?;

        to_public(inserted)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<PublicUser, UserRepositoryError> {
        if data.is_empty() {
            let current = Entity::find_by_id(user_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(UserRepositoryError::UserNotFound)?;
            return to_public(current);
        }

        let mut model = <ActiveModel as Default>::default();
        apply_patch(&mut model.display_name, data.display_name);
        apply_patch(&mut model.bio, data.bio);
        apply_patch(&mut model.avatar_url, data.avatar_url);

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(user_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(UserRepositoryError::UserNotFound)?;

        to_public(updated)
    }
}

fn apply_patch(slot: &mut sea_orm::ActiveValue<Option<String>>, patch: PatchField<String>) {
    match patch {
        PatchField::Unset => {}
        PatchField::Null => *slot = Set(None),
        PatchField::Value(v) => *slot = Set(Some(v)),
    }
}

fn to_public(model: users::Model) -> Result<PublicUser, UserRepositoryError> {
    let role = model
        .parsed_role()
        .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

    Ok(PublicUser {
        id: model.id,
        username: model.username,
        role,
        display_name: model.display_name,
        bio: model.bio,
        avatar_url: model.avatar_url,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

fn map_insert_err(e: DbErr) -> UserRepositoryError {
    if is_unique_violation(&e) {
        UserRepositoryError::UserAlreadyExists
    } else {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}
