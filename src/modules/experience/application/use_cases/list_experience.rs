use async_trait::async_trait;
use std::fmt;

use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceListFilter, ExperienceQuery, ExperienceQueryError,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRecord;

#[derive(Debug, Clone)]
pub enum ListExperienceError {
    RepositoryError(String),
}

impl fmt::Display for ListExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListExperienceError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ExperienceListFilter,
    ) -> Result<Vec<ExperienceRecord>, ListExperienceError>;
}

pub struct ListExperienceService<Q>
where
    Q: ExperienceQuery,
{
    experience_query: Q,
}

impl<Q> ListExperienceService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(experience_query: Q) -> Self {
        Self { experience_query }
    }
}

#[async_trait]
impl<Q> ListExperienceUseCase for ListExperienceService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ExperienceListFilter,
    ) -> Result<Vec<ExperienceRecord>, ListExperienceError> {
        self.experience_query
            .list(filter)
            .await
            .map_err(|e| match e {
                ExperienceQueryError::DatabaseError(msg) => {
                    ListExperienceError::RepositoryError(msg)
                }
            })
    }
}
