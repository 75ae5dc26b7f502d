use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteProjectError {
    ProjectNotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteProjectError::ProjectNotFound => write!(f, "project not found"),
            DeleteProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<(), DeleteProjectError>;
}

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<(), DeleteProjectError> {
        self.project_repository
            .delete_project(project_id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => DeleteProjectError::ProjectNotFound,
                ProjectRepositoryError::SlugAlreadyExists => DeleteProjectError::RepositoryError(
                    "unexpected slug conflict while deleting".to_string(),
                ),
                ProjectRepositoryError::DatabaseError(msg) => {
                    DeleteProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::SerializationError(msg) => {
                    DeleteProjectError::RepositoryError(msg)
                }
            })
    }
}
