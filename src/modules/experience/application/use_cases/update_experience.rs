use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceRecord, ExperienceRepository, ExperienceRepositoryError, UpdateExperienceData,
};

#[derive(Debug, Clone)]
pub enum UpdateExperienceError {
    ExperienceNotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateExperienceError::ExperienceNotFound => write!(f, "experience not found"),
            UpdateExperienceError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        experience_id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, UpdateExperienceError>;
}

pub struct UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    experience_repository: R,
}

impl<R> UpdateExperienceService<R>
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
impl<R> UpdateExperienceUseCase for UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        experience_id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, UpdateExperienceError> {
        self.experience_repository
            .update_experience(experience_id, data)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => UpdateExperienceError::ExperienceNotFound,
                ExperienceRepositoryError::DatabaseError(msg) => {
                    UpdateExperienceError::RepositoryError(msg)
                }
                ExperienceRepositoryError::SerializationError(msg) => {
                    UpdateExperienceError::RepositoryError(msg)
                }
            })
    }
}
