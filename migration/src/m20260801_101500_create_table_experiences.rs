use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Experiences::Role).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Experiences::Organization)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::Location).text())
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    // NULL end date means "Present"
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    // JSON text: ordered array of bullet strings
                    .col(
                        ColumnDef::new(Experiences::Description)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    // "Work" | "Research" | "Internship" | "Volunteer"
                    .col(
                        ColumnDef::new(Experiences::Kind)
                            .text()
                            .not_null()
                            .default("Work"),
                    )
                    .col(
                        ColumnDef::new(Experiences::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Experiences::Visible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Experiences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Public timeline: visible entries in display order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experiences_visible_sort_order
                ON experiences (visible, sort_order);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_experiences_visible_sort_order;")
            .await?;

        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Role,
    Organization,
    Location,
    StartDate,
    EndDate,
    Description,
    Kind,
    SortOrder,
    Visible,
    CreatedAt,
    UpdatedAt,
}
