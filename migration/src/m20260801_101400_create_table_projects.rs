use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Projects::Slug).string_len(150).not_null())
                    .col(ColumnDef::new(Projects::Overview).text().not_null())
                    .col(ColumnDef::new(Projects::Problem).text())
                    .col(ColumnDef::new(Projects::Process).text())
                    .col(ColumnDef::new(Projects::Solution).text())
                    .col(ColumnDef::new(Projects::Result).text())
                    // JSON text: array of strings
                    .col(
                        ColumnDef::new(Projects::TechStack)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    // JSON text: ordered array of URLs, first = cover
                    .col(
                        ColumnDef::new(Projects::ImageGallery)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Projects::SeoTitle).text())
                    .col(ColumnDef::new(Projects::SeoDesc).text())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_projects_slug_unique
                ON projects (lower(slug));
                "#,
            )
            .await?;

        // Featured listings in display order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_featured_sort_order
                ON projects (featured, sort_order);
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
                DROP INDEX IF EXISTS idx_projects_slug_unique;
                DROP INDEX IF EXISTS idx_projects_featured_sort_order;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Slug,
    Overview,
    Problem,
    Process,
    Solution,
    Result,
    TechStack,
    ImageGallery,
    Featured,
    SortOrder,
    SeoTitle,
    SeoDesc,
    CreatedAt,
    UpdatedAt,
}
