// src/modules/experience/application/ports/outgoing/experience_query.rs

use async_trait::async_trait;

use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRecord;

#[derive(Debug, Clone, Default)]
pub struct ExperienceListFilter {
    /// Public timeline shows visible entries only; the admin lists all.
    pub visible_only: bool,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    /// Ascending display order.
    async fn list(
        &self,
        filter: ExperienceListFilter,
    ) -> Result<Vec<ExperienceRecord>, ExperienceQueryError>;
}
