use async_trait::async_trait;
use std::fmt;

use crate::modules::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
};

#[derive(Debug, Clone)]
pub enum CreateExperienceError {
    RepositoryError(String),
}

impl fmt::Display for CreateExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateExperienceError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, CreateExperienceError>;
}

pub struct CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    experience_repository: R,
}

impl<R> CreateExperienceService<R>
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
impl<R> CreateExperienceUseCase for CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, CreateExperienceError> {
        self.experience_repository
            .create_experience(data)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::DatabaseError(msg) => {
                    CreateExperienceError::RepositoryError(msg)
                }
                ExperienceRepositoryError::SerializationError(msg) => {
                    CreateExperienceError::RepositoryError(msg)
                }
                ExperienceRepositoryError::NotFound => CreateExperienceError::RepositoryError(
                    "unexpected not found while creating experience".to_string(),
                ),
            })
    }
}
