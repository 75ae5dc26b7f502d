use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::project_repository_postgres::model_to_record;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery, ProjectQueryError,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRecord;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
        let mut query = Entity::find().order_by_asc(Column::SortOrder);

        if filter.featured_only {
            query = query.filter(Column::Featured.eq(true));
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let projects = query.all(&*self.db).await.map_err(map_db_err)?;

        Ok(projects.into_iter().map(model_to_record).collect())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<ProjectRecord, ProjectQueryError> {
        let normalized = slug.trim().to_lowercase();

        let project = Entity::find()
            .filter(Column::Slug.eq(&normalized))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        Ok(model_to_record(project))
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn project_model(slug: &str, featured: bool, sort_order: i32) -> projects::Model {
        let now = Utc::now().fixed_offset();
        projects::Model {
            id: Uuid::new_v4(),
            title: slug.to_string(),
            slug: slug.to_string(),
            overview: "overview".to_string(),
            problem: None,
            process: None,
            solution: None,
            result: None,
            tech_stack: "[]".to_string(),
            image_gallery: "[]".to_string(),
            featured,
            sort_order,
            seo_title: None,
            seo_desc: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_maps_models_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                project_model("first", true, 0),
                project_model("second", false, 1),
            ]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let projects = query.list(ProjectListFilter::default()).await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].slug, "first");
    }

    #[tokio::test]
    async fn test_get_by_slug_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let result = query.get_by_slug("nope").await;

        assert!(matches!(result.unwrap_err(), ProjectQueryError::NotFound));
    }
}
