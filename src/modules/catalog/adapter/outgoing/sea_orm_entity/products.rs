use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// JSONB array of absolute image URLs.
    #[sea_orm(column_type = "JsonBinary")]
    pub image_urls: Json,

    #[sea_orm(nullable)]
    pub price_cents: Option<i64>,

    pub currency: String,

    #[sea_orm(column_type = "Text")]
    pub source_url: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub brand_id: Option<Uuid>,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub category_id: Option<Uuid>,

    #[sea_orm(column_type = "Text", nullable)]
    pub ai_summary: Option<String>,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub created_by: Option<Uuid>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brands::Entity",
        from = "Column::BrandId",
        to = "super::brands::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Brand,

    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<super::brands::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

// updated_at is maintained by the update_products_updated_at trigger
impl ActiveModelBehavior for ActiveModel {}
