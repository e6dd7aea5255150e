use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collection_views")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub collection_id: Uuid,

    /// Null for anonymous viewers.
    #[sea_orm(column_type = "Uuid", nullable)]
    pub user_id: Option<Uuid>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::collection::adapter::outgoing::sea_orm_entity::collections::Entity",
        from = "Column::CollectionId",
        to = "crate::modules::collection::adapter::outgoing::sea_orm_entity::collections::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Collection,
}

impl ActiveModelBehavior for ActiveModel {}
