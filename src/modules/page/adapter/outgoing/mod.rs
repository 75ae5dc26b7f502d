pub mod page_store_postgres;
pub mod sea_orm_entity;
