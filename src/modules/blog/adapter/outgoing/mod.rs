pub mod blog_query_postgres;
pub mod blog_repository_postgres;
pub mod sea_orm_entity;
