use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::skill::application::ports::outgoing::skill_repository::{
    SkillRecord, SkillRepository, SkillRepositoryError, UpdateSkillData,
};

#[derive(Debug, Clone)]
pub enum UpdateSkillError {
    SkillNotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateSkillError::SkillNotFound => write!(f, "skill not found"),
            UpdateSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        skill_id: Uuid,
        data: UpdateSkillData,
    ) -> Result<SkillRecord, UpdateSkillError>;
}

pub struct UpdateSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> UpdateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        skill_id: Uuid,
        data: UpdateSkillData,
    ) -> Result<SkillRecord, UpdateSkillError> {
        self.skill_repository
            .update_skill(skill_id, data)
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => UpdateSkillError::SkillNotFound,
                SkillRepositoryError::DatabaseError(msg) => UpdateSkillError::RepositoryError(msg),
            })
    }
}
