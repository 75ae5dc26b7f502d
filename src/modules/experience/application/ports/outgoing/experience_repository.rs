// src/modules/experience/application/ports/outgoing/experience_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::ExperienceType;
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub role: String,
    pub organization: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Display form of the engagement period ("Jan 2023 - Present").
    pub period: String,
    /// Ordered bullet points.
    pub description: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateExperienceData {
    pub role: String,
    pub organization: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    /// Stored as JSON text (ordered array of bullet strings)
    pub description: Vec<String>,

    pub kind: ExperienceType,
    pub sort_order: i32,
    pub visible: bool,
}

/// Update semantics:
/// - location/end_date: Unset => keep, Null => clear (an ongoing role has
///   no end date)
/// - description: Value(vec) => replace whole array (no merge)
#[derive(Debug, Clone, Default)]
pub struct UpdateExperienceData {
    pub role: Option<String>,
    pub organization: Option<String>,
    pub location: PatchField<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
    pub description: Option<Vec<String>>,
    pub kind: Option<ExperienceType>,
    pub sort_order: Option<i32>,
    pub visible: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create_experience(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn update_experience(
        &self,
        experience_id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn delete_experience(
        &self,
        experience_id: Uuid,
    ) -> Result<(), ExperienceRepositoryError>;
}
