use async_trait::async_trait;
use std::fmt;

use crate::modules::page::application::ports::outgoing::page_store::{
    PageRecord, PageRepository, PageStoreError, UpdatePageData,
};

#[derive(Debug, Clone)]
pub enum UpdatePageError {
    PageNotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdatePageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdatePageError::PageNotFound => write!(f, "page not found"),
            UpdatePageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdatePageUseCase: Send + Sync {
    async fn execute(&self, slug: &str, data: UpdatePageData)
        -> Result<PageRecord, UpdatePageError>;
}

pub struct UpdatePageService<R>
where
    R: PageRepository,
{
    page_repository: R,
}

impl<R> UpdatePageService<R>
where
    R: PageRepository,
{
    pub fn new(page_repository: R) -> Self {
        Self { page_repository }
    }
}

#[async_trait]
impl<R> UpdatePageUseCase for UpdatePageService<R>
where
    R: PageRepository + Send + Sync,
{
    async fn execute(
        &self,
        slug: &str,
        data: UpdatePageData,
    ) -> Result<PageRecord, UpdatePageError> {
        self.page_repository
            .update_by_slug(slug, data)
            .await
            .map_err(|e| match e {
                PageStoreError::NotFound => UpdatePageError::PageNotFound,
                PageStoreError::DatabaseError(msg) => UpdatePageError::RepositoryError(msg),
                PageStoreError::SerializationError(msg) => UpdatePageError::RepositoryError(msg),
            })
    }
}
