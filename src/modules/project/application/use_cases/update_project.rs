use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRecord, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};

#[derive(Debug, Clone)]
pub enum UpdateProjectError {
    ProjectNotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProjectError::ProjectNotFound => write!(f, "project not found"),
            UpdateProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError>;
}

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        self.project_repository
            .update_project(project_id, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::ProjectNotFound,
                ProjectRepositoryError::SlugAlreadyExists => {
                    UpdateProjectError::RepositoryError("slug already exists".to_string())
                }
                ProjectRepositoryError::DatabaseError(msg) => {
                    UpdateProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::SerializationError(msg) => {
                    UpdateProjectError::RepositoryError(msg)
                }
            })
    }
}
