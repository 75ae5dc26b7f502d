// src/modules/blog/application/ports/outgoing/blog_repository.rs

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
pub struct BlogRecord {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    /// Markdown source; rendering happens elsewhere.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    /// Set exactly once, on the first unpublished→published transition.
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_desc: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateBlogData {
    pub title: String,

    /// Slug is immutable after creation.
    pub slug: String,

    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,

    /// Stored as JSON text (array of strings)
    pub tags: Vec<String>,

    pub published: bool,
    pub seo_title: Option<String>,
    pub seo_desc: Option<String>,
}

/// Update semantics:
/// - title/content: Unset => keep, Value => replace
/// - tags: Value(vec) => replace whole array (no merge)
/// - excerpt/featured_image/seo fields: Unset => keep, Null => clear
/// - published/published_at: decided by the update use case, which reads
///   the previous publish state first
#[derive(Debug, Clone, Default)]
pub struct UpdateBlogData {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: PatchField<String>,
    pub featured_image: PatchField<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    pub published_at: PatchField<DateTime<Utc>>,
    pub seo_title: PatchField<String>,
    pub seo_desc: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogRepositoryError {
    #[error("Blog not found")]
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
pub trait BlogRepository: Send + Sync {
    async fn create_blog(&self, data: CreateBlogData) -> Result<BlogRecord, BlogRepositoryError>;

    async fn update_blog(
        &self,
        blog_id: Uuid,
        data: UpdateBlogData,
    ) -> Result<BlogRecord, BlogRepositoryError>;

    async fn delete_blog(&self, blog_id: Uuid) -> Result<(), BlogRepositoryError>;
}
