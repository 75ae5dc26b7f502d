pub mod create_blog;
pub mod delete_blog;
pub mod get_blog;
pub mod list_blogs;
pub mod update_blog;
