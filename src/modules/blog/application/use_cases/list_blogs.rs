use async_trait::async_trait;
use std::fmt;

use crate::modules::blog::application::ports::outgoing::blog_query::{
    BlogListFilter, BlogQuery, BlogQueryError,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::BlogRecord;

#[derive(Debug, Clone)]
pub enum ListBlogsError {
    RepositoryError(String),
}

impl fmt::Display for ListBlogsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListBlogsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListBlogsUseCase: Send + Sync {
    async fn execute(&self, filter: BlogListFilter) -> Result<Vec<BlogRecord>, ListBlogsError>;
}

pub struct ListBlogsService<Q>
where
    Q: BlogQuery,
{
    blog_query: Q,
}

impl<Q> ListBlogsService<Q>
where
    Q: BlogQuery,
{
    pub fn new(blog_query: Q) -> Self {
        Self { blog_query }
    }
}

#[async_trait]
impl<Q> ListBlogsUseCase for ListBlogsService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, filter: BlogListFilter) -> Result<Vec<BlogRecord>, ListBlogsError> {
        self.blog_query.list(filter).await.map_err(|e| match e {
            BlogQueryError::NotFound => {
                ListBlogsError::RepositoryError("unexpected not found while listing".to_string())
            }
            BlogQueryError::DatabaseError(msg) => ListBlogsError::RepositoryError(msg),
        })
    }
}
