use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Pages::Slug).text().not_null())
                    .col(ColumnDef::new(Pages::Title).text().not_null())
                    // JSON text: `{"sections": [...]}`
                    .col(
                        ColumnDef::new(Pages::Content)
                            .text()
                            .not_null()
                            .default("{\"sections\":[]}"),
                    )
                    .col(ColumnDef::new(Pages::SeoTitle).text())
                    .col(ColumnDef::new(Pages::SeoDesc).text())
                    .col(
                        ColumnDef::new(Pages::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Pages::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Pages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Pages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Enforce slug uniqueness (case-insensitive)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_pages_slug_unique
                ON pages (lower(slug));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_pages_slug_unique;")
            .await?;

        manager
            .drop_table(Table::drop().table(Pages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pages {
    Table,
    Id,
    Slug,
    Title,
    Content,
    SeoTitle,
    SeoDesc,
    Enabled,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
