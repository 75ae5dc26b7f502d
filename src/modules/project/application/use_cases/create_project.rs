use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreateProjectError {
    SlugAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectError::SlugAlreadyExists => write!(f, "slug already exists"),
            CreateProjectError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: CreateProjectData)
        -> Result<ProjectRecord, CreateProjectError>;
}

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectRecord, CreateProjectError> {
        self.project_repository
            .create_project(data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::SlugAlreadyExists => CreateProjectError::SlugAlreadyExists,
                ProjectRepositoryError::DatabaseError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::SerializationError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
                // Defensive: should never happen on create
                ProjectRepositoryError::NotFound => CreateProjectError::RepositoryError(
                    "unexpected not found while creating project".to_string(),
                ),
            })
    }
}
