// src/modules/skill/application/ports/outgoing/skill_query.rs

use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::skill_repository::SkillRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// Category ascending, then order ascending within the category; this
    /// is the grouping the skills display consumes directly.
    async fn list(&self) -> Result<Vec<SkillRecord>, SkillQueryError>;
}
