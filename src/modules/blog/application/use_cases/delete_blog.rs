use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogRepository, BlogRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteBlogError {
    BlogNotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteBlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteBlogError::BlogNotFound => write!(f, "blog not found"),
            DeleteBlogError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteBlogUseCase: Send + Sync {
    async fn execute(&self, blog_id: Uuid) -> Result<(), DeleteBlogError>;
}

pub struct DeleteBlogService<R>
where
    R: BlogRepository,
{
    blog_repository: R,
}

impl<R> DeleteBlogService<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repository: R) -> Self {
        Self { blog_repository }
    }
}

#[async_trait]
impl<R> DeleteBlogUseCase for DeleteBlogService<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, blog_id: Uuid) -> Result<(), DeleteBlogError> {
        self.blog_repository
            .delete_blog(blog_id)
            .await
            .map_err(|e| match e {
                BlogRepositoryError::NotFound => DeleteBlogError::BlogNotFound,
                BlogRepositoryError::SlugAlreadyExists => DeleteBlogError::RepositoryError(
                    "unexpected slug conflict while deleting".to_string(),
                ),
                BlogRepositoryError::DatabaseError(msg) => DeleteBlogError::RepositoryError(msg),
                BlogRepositoryError::SerializationError(msg) => {
                    DeleteBlogError::RepositoryError(msg)
                }
            })
    }
}
