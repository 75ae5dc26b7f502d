// src/modules/page/application/ports/outgoing/page_store.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::page::application::domain::sections::PageContent;
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub content: PageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_desc: Option<String>,
    pub enabled: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Page content as submitted by the admin: either a pre-encoded JSON
/// string or structured sections. Both store as JSON text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PageContentInput {
    Raw(String),
    Structured(PageContent),
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePageData {
    pub title: Option<String>,
    pub content: Option<PageContentInput>,
    pub seo_title: PatchField<String>,
    pub seo_desc: PatchField<String>,
    pub enabled: Option<bool>,
    pub sort_order: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PageStoreError {
    #[error("Page not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PageQuery: Send + Sync {
    async fn get_by_slug(&self, slug: &str) -> Result<PageRecord, PageStoreError>;
}

#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Pages are keyed by slug in every observed flow; they are created
    /// by the seed and never deleted.
    async fn update_by_slug(
        &self,
        slug: &str,
        data: UpdatePageData,
    ) -> Result<PageRecord, PageStoreError>;
}
