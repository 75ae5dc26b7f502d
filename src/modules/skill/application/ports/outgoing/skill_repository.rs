// src/modules/skill/application/ports/outgoing/skill_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    /// Free-text grouping key; ordering is scoped within it.
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateSkillData {
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSkillData {
    pub name: Option<String>,
    pub category: Option<String>,
    pub icon: PatchField<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, data: CreateSkillData)
        -> Result<SkillRecord, SkillRepositoryError>;

    async fn update_skill(
        &self,
        skill_id: Uuid,
        data: UpdateSkillData,
    ) -> Result<SkillRecord, SkillRepositoryError>;

    async fn delete_skill(&self, skill_id: Uuid) -> Result<(), SkillRepositoryError>;
}
