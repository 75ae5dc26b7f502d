use async_trait::async_trait;
use std::fmt;

use crate::modules::skill::application::ports::outgoing::skill_repository::{
    CreateSkillData, SkillRecord, SkillRepository, SkillRepositoryError,
};

#[derive(Debug, Clone)]
pub enum CreateSkillError {
    RepositoryError(String),
}

impl fmt::Display for CreateSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, data: CreateSkillData) -> Result<SkillRecord, CreateSkillError>;
}

pub struct CreateSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> CreateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, data: CreateSkillData) -> Result<SkillRecord, CreateSkillError> {
        self.skill_repository
            .create_skill(data)
            .await
            .map_err(|e| match e {
                SkillRepositoryError::DatabaseError(msg) => CreateSkillError::RepositoryError(msg),
                SkillRepositoryError::NotFound => CreateSkillError::RepositoryError(
                    "unexpected not found while creating skill".to_string(),
                ),
            })
    }
}
