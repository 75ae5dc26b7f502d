use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::skill::application::ports::outgoing::skill_repository::{
    SkillRepository, SkillRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteSkillError {
    SkillNotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteSkillError::SkillNotFound => write!(f, "skill not found"),
            DeleteSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, skill_id: Uuid) -> Result<(), DeleteSkillError>;
}

pub struct DeleteSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> DeleteSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for DeleteSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, skill_id: Uuid) -> Result<(), DeleteSkillError> {
        self.skill_repository
            .delete_skill(skill_id)
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => DeleteSkillError::SkillNotFound,
                SkillRepositoryError::DatabaseError(msg) => DeleteSkillError::RepositoryError(msg),
            })
    }
}
