use sea_orm::entity::prelude::*;

/// Append-only outbound click log.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clicks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub product_id: Uuid,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub collection_id: Option<Uuid>,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub user_id: Option<Uuid>,

    #[sea_orm(column_type = "Text", nullable)]
    pub referrer: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::catalog::adapter::outgoing::sea_orm_entity::products::Entity",
        from = "Column::ProductId",
        to = "crate::modules::catalog::adapter::outgoing::sea_orm_entity::products::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Product,

    #[sea_orm(
        belongs_to = "crate::modules::collection::adapter::outgoing::sea_orm_entity::collections::Entity",
        from = "Column::CollectionId",
        to = "crate::modules::collection::adapter::outgoing::sea_orm_entity::collections::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Collection,
}

impl ActiveModelBehavior for ActiveModel {}
