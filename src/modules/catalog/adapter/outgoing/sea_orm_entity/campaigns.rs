use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub brand_id: Uuid,

    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub starts_at: DateTimeWithTimeZone,

    /// Check constraint: NULL or >= starts_at.
    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub ends_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brands::Entity",
        from = "Column::BrandId",
        to = "super::brands::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Brand,

    #[sea_orm(has_many = "super::campaign_products::Entity")]
    CampaignProducts,
}

impl Related<super::campaign_products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignProducts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
