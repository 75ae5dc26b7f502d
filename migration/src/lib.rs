pub use sea_orm_migration::prelude::*;

mod m20260801_101000_create_table_users;
mod m20260801_101100_create_table_settings;
mod m20260801_101200_create_table_pages;
mod m20260801_101300_create_table_blogs;
mod m20260801_101400_create_table_projects;
mod m20260801_101500_create_table_experiences;
mod m20260801_101600_create_table_skills;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_101000_create_table_users::Migration),
            Box::new(m20260801_101100_create_table_settings::Migration),
            Box::new(m20260801_101200_create_table_pages::Migration),
            Box::new(m20260801_101300_create_table_blogs::Migration),
            Box::new(m20260801_101400_create_table_projects::Migration),
            Box::new(m20260801_101500_create_table_experiences::Migration),
            Box::new(m20260801_101600_create_table_skills::Migration),
        ]
    }
}
