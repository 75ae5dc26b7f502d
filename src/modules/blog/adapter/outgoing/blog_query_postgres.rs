use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::blog_repository_postgres::model_to_record;
use crate::modules::blog::adapter::outgoing::sea_orm_entity::blogs::{self, Column, Entity};
use crate::modules::blog::application::ports::outgoing::blog_query::{
    BlogListFilter, BlogQuery, BlogQueryError,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::BlogRecord;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct BlogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogQuery for BlogQueryPostgres {
    async fn list(&self, filter: BlogListFilter) -> Result<Vec<BlogRecord>, BlogQueryError> {
        let mut query = Entity::find().order_by_desc(Column::CreatedAt);

        if filter.published_only {
            query = query.filter(Column::Published.eq(true));
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let blogs = query.all(&*self.db).await.map_err(map_db_err)?;

        Ok(blogs.into_iter().map(model_to_record).collect())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<BlogRecord, BlogQueryError> {
        let normalized = slug.trim().to_lowercase();

        let blog = Entity::find()
            .filter(Column::Slug.eq(&normalized))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogQueryError::NotFound)?;

        Ok(model_to_record(blog))
    }

    async fn get_by_id(&self, blog_id: Uuid) -> Result<BlogRecord, BlogQueryError> {
        let blog = Entity::find_by_id(blog_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogQueryError::NotFound)?;

        Ok(model_to_record(blog))
    }
}

fn map_db_err(e: DbErr) -> BlogQueryError {
    BlogQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
