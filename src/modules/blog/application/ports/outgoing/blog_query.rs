// src/modules/blog/application/ports/outgoing/blog_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::blog_repository::BlogRecord;

//
// ──────────────────────────────────────────────────────────
// Filters
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct BlogListFilter {
    /// Public surfaces list published posts only; the admin lists all.
    pub published_only: bool,
    /// Optional cap, e.g. the home page shows the latest three.
    pub limit: Option<u64>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogQueryError {
    #[error("Blog not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (query side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BlogQuery: Send + Sync {
    /// Most-recently-created first.
    async fn list(&self, filter: BlogListFilter) -> Result<Vec<BlogRecord>, BlogQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<BlogRecord, BlogQueryError>;

    async fn get_by_id(&self, blog_id: Uuid) -> Result<BlogRecord, BlogQueryError>;
}
