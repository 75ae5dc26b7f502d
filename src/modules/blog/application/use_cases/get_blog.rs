use async_trait::async_trait;
use std::fmt;

use crate::modules::blog::application::ports::outgoing::blog_query::{BlogQuery, BlogQueryError};
use crate::modules::blog::application::ports::outgoing::blog_repository::BlogRecord;

#[derive(Debug, Clone)]
pub enum GetBlogError {
    BlogNotFound,
    RepositoryError(String),
}

impl fmt::Display for GetBlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetBlogError::BlogNotFound => write!(f, "blog not found"),
            GetBlogError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Public lookup by slug.
#[async_trait]
pub trait GetBlogUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<BlogRecord, GetBlogError>;
}

pub struct GetBlogService<Q>
where
    Q: BlogQuery,
{
    blog_query: Q,
}

impl<Q> GetBlogService<Q>
where
    Q: BlogQuery,
{
    pub fn new(blog_query: Q) -> Self {
        Self { blog_query }
    }
}

#[async_trait]
impl<Q> GetBlogUseCase for GetBlogService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<BlogRecord, GetBlogError> {
        self.blog_query
            .get_by_slug(slug)
            .await
            .map_err(|e| match e {
                BlogQueryError::NotFound => GetBlogError::BlogNotFound,
                BlogQueryError::DatabaseError(msg) => GetBlogError::RepositoryError(msg),
            })
    }
}
