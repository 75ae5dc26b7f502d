use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery, ProjectQueryError,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRecord;

#[derive(Debug, Clone)]
pub enum ListProjectsError {
    RepositoryError(String),
}

impl fmt::Display for ListProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListProjectsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Vec<ProjectRecord>, ListProjectsError>;
}

pub struct ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    project_query: Q,
}

impl<Q> ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(project_query: Q) -> Self {
        Self { project_query }
    }
}

#[async_trait]
impl<Q> ListProjectsUseCase for ListProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Vec<ProjectRecord>, ListProjectsError> {
        self.project_query.list(filter).await.map_err(|e| match e {
            ProjectQueryError::NotFound => ListProjectsError::RepositoryError(
                "unexpected not found while listing".to_string(),
            ),
            ProjectQueryError::DatabaseError(msg) => ListProjectsError::RepositoryError(msg),
        })
    }
}
