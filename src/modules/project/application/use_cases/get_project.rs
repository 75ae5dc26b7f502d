use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRecord;

#[derive(Debug, Clone)]
pub enum GetProjectError {
    ProjectNotFound,
    RepositoryError(String),
}

impl fmt::Display for GetProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProjectError::ProjectNotFound => write!(f, "project not found"),
            GetProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Public lookup by slug.
#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ProjectRecord, GetProjectError>;
}

pub struct GetProjectService<Q>
where
    Q: ProjectQuery,
{
    project_query: Q,
}

impl<Q> GetProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(project_query: Q) -> Self {
        Self { project_query }
    }
}

#[async_trait]
impl<Q> GetProjectUseCase for GetProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ProjectRecord, GetProjectError> {
        self.project_query
            .get_by_slug(slug)
            .await
            .map_err(|e| match e {
                ProjectQueryError::NotFound => GetProjectError::ProjectNotFound,
                ProjectQueryError::DatabaseError(msg) => GetProjectError::RepositoryError(msg),
            })
    }
}
