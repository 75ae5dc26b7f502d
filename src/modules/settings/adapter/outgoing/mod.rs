pub mod sea_orm_entity;
pub mod settings_store_postgres;
