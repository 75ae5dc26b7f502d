// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_repository::ProjectRecord;

#[derive(Debug, Clone, Default)]
pub struct ProjectListFilter {
    /// The home page shows featured projects only.
    pub featured_only: bool,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Ascending display order.
    async fn list(&self, filter: ProjectListFilter)
        -> Result<Vec<ProjectRecord>, ProjectQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<ProjectRecord, ProjectQueryError>;
}
