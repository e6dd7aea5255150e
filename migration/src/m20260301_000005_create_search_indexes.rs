use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Full-text and trigram indexes backing the tiered search.
/// The expressions must match the ones used by the search adapter verbatim,
/// otherwise Postgres will not pick the index.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_products_fts
                ON products USING GIN (
                    to_tsvector('simple', name || ' ' || coalesce(description, ''))
                );
                CREATE INDEX IF NOT EXISTS idx_products_name_trgm
                ON products USING GIN (name gin_trgm_ops);

                CREATE INDEX IF NOT EXISTS idx_collections_fts
                ON collections USING GIN (
                    to_tsvector('simple', title || ' ' || coalesce(description, ''))
                );
                CREATE INDEX IF NOT EXISTS idx_collections_title_trgm
                ON collections USING GIN (title gin_trgm_ops);

                CREATE INDEX IF NOT EXISTS idx_users_fts
                ON users USING GIN (
                    to_tsvector('simple', username || ' ' || coalesce(display_name, ''))
                );
                CREATE INDEX IF NOT EXISTS idx_users_username_trgm
                ON users USING GIN (username gin_trgm_ops);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_products_fts;
                DROP INDEX IF EXISTS idx_products_name_trgm;
                DROP INDEX IF EXISTS idx_collections_fts;
                DROP INDEX IF EXISTS idx_collections_title_trgm;
                DROP INDEX IF EXISTS idx_users_fts;
                DROP INDEX IF EXISTS idx_users_username_trgm;
                "#,
            )
            .await?;

        Ok(())
    }
}
