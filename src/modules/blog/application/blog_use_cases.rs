use std::sync::Arc;

use crate::modules::blog::application::use_cases::{
    create_blog::CreateBlogUseCase, delete_blog::DeleteBlogUseCase, get_blog::GetBlogUseCase,
    list_blogs::ListBlogsUseCase, update_blog::UpdateBlogUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub list: Arc<dyn ListBlogsUseCase + Send + Sync>,
    pub get: Arc<dyn GetBlogUseCase + Send + Sync>,
    pub create: Arc<dyn CreateBlogUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateBlogUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteBlogUseCase + Send + Sync>,
}
