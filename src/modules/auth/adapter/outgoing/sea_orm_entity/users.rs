use sea_orm::entity::prelude::*;
use std::str::FromStr;

use crate::modules::auth::application::domain::entities::{UnknownRole, UserRole};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    /// Stored lower-case; unique on lower(email).
    pub email: String,

    /// Stored lower-case; unique on lower(username).
    pub username: String,

    pub password_hash: String,

    /// SHOPPER | CREATOR | BRAND | ADMIN, guarded by a check constraint.
    pub role: String,

    #[sea_orm(nullable)]
    pub display_name: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub avatar_url: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn parsed_role(&self) -> Result<UserRole, UnknownRole> {
        UserRole::from_str(&self.role)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// updated_at is maintained by the update_users_updated_at trigger
impl ActiveModelBehavior for ActiveModel {}
