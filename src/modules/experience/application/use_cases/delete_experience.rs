use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceRepository, ExperienceRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteExperienceError {
    ExperienceNotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteExperienceError::ExperienceNotFound => write!(f, "experience not found"),
            DeleteExperienceError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, experience_id: Uuid) -> Result<(), DeleteExperienceError>;
}

pub struct DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    experience_repository: R,
}

impl<R> DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(experience_repository: R) -> Self {
        Self {
            experience_repository,
        }
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, experience_id: Uuid) -> Result<(), DeleteExperienceError> {
        self.experience_repository
            .delete_experience(experience_id)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => DeleteExperienceError::ExperienceNotFound,
                ExperienceRepositoryError::DatabaseError(msg) => {
                    DeleteExperienceError::RepositoryError(msg)
                }
                ExperienceRepositoryError::SerializationError(msg) => {
                    DeleteExperienceError::RepositoryError(msg)
                }
            })
    }
}
