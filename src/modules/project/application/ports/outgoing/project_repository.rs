// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub overview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub tech_stack: Vec<String>,
    /// First entry is the cover image.
    pub image_gallery: Vec<String>,
    pub featured: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_desc: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub title: String,

    /// Slug is immutable: only set at creation time
    pub slug: String,

    pub overview: String,
    pub problem: Option<String>,
    pub process: Option<String>,
    pub solution: Option<String>,
    pub result: Option<String>,

    /// Stored as JSON text (array of strings)
    pub tech_stack: Vec<String>,

    /// Stored as JSON text (ordered array of URLs)
    pub image_gallery: Vec<String>,

    pub featured: bool,
    pub sort_order: i32,
    pub seo_title: Option<String>,
    pub seo_desc: Option<String>,
}

/// Update semantics:
/// - title/overview: Unset => keep, Value => replace
/// - tech_stack/image_gallery: Value(vec) => replace whole array (no merge)
/// - narrative and seo fields: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectData {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub problem: PatchField<String>,
    pub process: PatchField<String>,
    pub solution: PatchField<String>,
    pub result: PatchField<String>,
    pub tech_stack: Option<Vec<String>>,
    pub image_gallery: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
    pub seo_title: PatchField<String>,
    pub seo_desc: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    /// Unique slug violated at INSERT time.
    #[error("Slug already exists")]
    SlugAlreadyExists,

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
pub trait ProjectRepository: Send + Sync {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn update_project(
        &self,
        project_id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError>;
}
