use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // follows (self-referential many-to-many on users)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Follows::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Follows::FollowerId).uuid().not_null())
                    .col(ColumnDef::new(Follows::FollowingId).uuid().not_null())
                    .col(
                        ColumnDef::new(Follows::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(Follows::FollowerId)
                            .col(Follows::FollowingId),
                    )
                    .check(Expr::cust("follower_id <> following_id"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_follower_id")
                            .from(Follows::Table, Follows::FollowerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_following_id")
                            .from(Follows::Table, Follows::FollowingId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // user_likes
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(UserLikes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserLikes::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserLikes::CollectionId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserLikes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserLikes::UserId)
                            .col(UserLikes::CollectionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_likes_user_id")
                            .from(UserLikes::Table, UserLikes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_likes_collection_id")
                            .from(UserLikes::Table, UserLikes::CollectionId)
                            .to(Collections::Table, Collections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // comments
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comments::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Comments::UserId).uuid().not_null())
                    .col(ColumnDef::new(Comments::CollectionId).uuid().not_null())
                    .col(ColumnDef::new(Comments::Body).text().not_null())
                    .col(
                        ColumnDef::new(Comments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_user_id")
                            .from(Comments::Table, Comments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_collection_id")
                            .from(Comments::Table, Comments::CollectionId)
                            .to(Collections::Table, Collections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // clicks + collection_views (telemetry, append-only)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Clicks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clicks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Clicks::ProductId).uuid().not_null())
                    .col(ColumnDef::new(Clicks::CollectionId).uuid())
                    .col(ColumnDef::new(Clicks::UserId).uuid())
                    .col(ColumnDef::new(Clicks::Referrer).text())
                    .col(
                        ColumnDef::new(Clicks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clicks_product_id")
                            .from(Clicks::Table, Clicks::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clicks_collection_id")
                            .from(Clicks::Table, Clicks::CollectionId)
                            .to(Collections::Table, Collections::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clicks_user_id")
                            .from(Clicks::Table, Clicks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CollectionViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CollectionViews::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(CollectionViews::CollectionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CollectionViews::UserId).uuid())
                    .col(
                        ColumnDef::new(CollectionViews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_views_collection_id")
                            .from(CollectionViews::Table, CollectionViews::CollectionId)
                            .to(Collections::Table, Collections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_views_user_id")
                            .from(CollectionViews::Table, CollectionViews::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Analytics scans by target + time window
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_follows_following_id ON follows (following_id);
                CREATE INDEX IF NOT EXISTS idx_user_likes_collection_id ON user_likes (collection_id);
                CREATE INDEX IF NOT EXISTS idx_comments_collection_created ON comments (collection_id, created_at);
                CREATE INDEX IF NOT EXISTS idx_clicks_product_created ON clicks (product_id, created_at);
                CREATE INDEX IF NOT EXISTS idx_clicks_collection_created ON clicks (collection_id, created_at);
                CREATE INDEX IF NOT EXISTS idx_collection_views_collection_created ON collection_views (collection_id, created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CollectionViews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clicks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserLikes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Follows::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Collections {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Follows {
    Table,
    FollowerId,
    FollowingId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserLikes {
    Table,
    UserId,
    CollectionId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    UserId,
    CollectionId,
    Body,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Clicks {
    Table,
    Id,
    ProductId,
    CollectionId,
    UserId,
    Referrer,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CollectionViews {
    Table,
    Id,
    CollectionId,
    UserId,
    CreatedAt,
}
