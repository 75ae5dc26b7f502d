use async_trait::async_trait;
use std::fmt;

use crate::modules::skill::application::ports::outgoing::skill_query::{
    SkillQuery, SkillQueryError,
};
use crate::modules::skill::application::ports::outgoing::skill_repository::SkillRecord;

#[derive(Debug, Clone)]
pub enum ListSkillsError {
    RepositoryError(String),
}

impl fmt::Display for ListSkillsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSkillsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillRecord>, ListSkillsError>;
}

pub struct ListSkillsService<Q>
where
    Q: SkillQuery,
{
    skill_query: Q,
}

impl<Q> ListSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(skill_query: Q) -> Self {
        Self { skill_query }
    }
}

#[async_trait]
impl<Q> ListSkillsUseCase for ListSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SkillRecord>, ListSkillsError> {
        self.skill_query.list().await.map_err(|e| match e {
            SkillQueryError::DatabaseError(msg) => ListSkillsError::RepositoryError(msg),
        })
    }
}
