use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Blogs::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Blogs::Slug).string_len(200).not_null())
                    .col(ColumnDef::new(Blogs::Content).text().not_null())
                    .col(ColumnDef::new(Blogs::Excerpt).text())
                    .col(ColumnDef::new(Blogs::FeaturedImage).text())
                    // JSON text: array of tag strings
                    .col(
                        ColumnDef::new(Blogs::Tags)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(Blogs::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    // Set once, on the first unpublished -> published transition
                    .col(ColumnDef::new(Blogs::PublishedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Blogs::SeoTitle).text())
                    .col(ColumnDef::new(Blogs::SeoDesc).text())
                    .col(
                        ColumnDef::new(Blogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Blogs::UpdatedAt)
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
                CREATE UNIQUE INDEX IF NOT EXISTS idx_blogs_slug_unique
                ON blogs (lower(slug));
                "#,
            )
            .await?;

        // Public listings: published posts, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_blogs_published_created_at
                ON blogs (published, created_at DESC);
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
                DROP INDEX IF EXISTS idx_blogs_slug_unique;
                DROP INDEX IF EXISTS idx_blogs_published_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    Title,
    Slug,
    Content,
    Excerpt,
    FeaturedImage,
    Tags,
    Published,
    PublishedAt,
    SeoTitle,
    SeoDesc,
    CreatedAt,
    UpdatedAt,
}
