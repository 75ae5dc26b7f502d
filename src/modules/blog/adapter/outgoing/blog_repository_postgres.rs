use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blogs::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogRecord, BlogRepository, BlogRepositoryError, CreateBlogData, UpdateBlogData,
};
use crate::shared::codec;
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct BlogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for BlogRepositoryPostgres {
    async fn create_blog(&self, data: CreateBlogData) -> Result<BlogRecord, BlogRepositoryError> {
        let now = Utc::now().fixed_offset();

        // A post created already-published gets its timestamp immediately.
        let published_at = if data.published { Some(now) } else { None };

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            slug: Set(data.slug.trim().to_lowercase()),
            content: Set(data.content),
            excerpt: Set(data.excerpt),
            featured_image: Set(data.featured_image),
            tags: Set(to_json_text(&data.tags)?),
            published: Set(data.published),
            published_at: Set(published_at),
            seo_title: Set(data.seo_title),
            seo_desc: Set(data.seo_desc),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        Ok(model_to_record(result))
    }

    async fn update_blog(
        &self,
        blog_id: Uuid,
        data: UpdateBlogData,
    ) -> Result<BlogRecord, BlogRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = data.title {
            model.title = Set(title.trim().to_string());
        }

        if let Some(content) = data.content {
            model.content = Set(content);
        }

        match data.excerpt {
            PatchField::Unset => {}
            PatchField::Null => model.excerpt = Set(None),
            PatchField::Value(v) => model.excerpt = Set(Some(v)),
        }

        match data.featured_image {
            PatchField::Unset => {}
            PatchField::Null => model.featured_image = Set(None),
            PatchField::Value(v) => model.featured_image = Set(Some(v)),
        }

        if let Some(tags) = data.tags {
            model.tags = Set(to_json_text(&tags)?);
        }

        if let Some(published) = data.published {
            model.published = Set(published);
        }

        // Stamped by the use case on the first publish only.
        if let PatchField::Value(ts) = data.published_at {
            model.published_at = Set(Some(ts.fixed_offset()));
        }

        match data.seo_title {
            PatchField::Unset => {}
            PatchField::Null => model.seo_title = Set(None),
            PatchField::Value(v) => model.seo_title = Set(Some(v)),
        }

        match data.seo_desc {
            PatchField::Unset => {}
            PatchField::Null => model.seo_desc = Set(None),
            PatchField::Value(v) => model.seo_desc = Set(Some(v)),
        }

        let has_changes = model.title.is_set()
            || model.content.is_set()
            || model.excerpt.is_set()
            || model.featured_image.is_set()
            || model.tags.is_set()
            || model.published.is_set()
            || model.published_at.is_set()
            || model.seo_title.is_set()
            || model.seo_desc.is_set();

        if !has_changes {
            let result = Entity::find_by_id(blog_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(BlogRepositoryError::NotFound)?;

            return Ok(model_to_record(result));
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(blog_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_slug_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(BlogRepositoryError::NotFound)?;

        Ok(model_to_record(result))
    }

    async fn delete_blog(&self, blog_id: Uuid) -> Result<(), BlogRepositoryError> {
        let blog = Entity::find_by_id(blog_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogRepositoryError::NotFound)?;

        blog.delete(&*self.db).await.map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn model_to_record(model: blogs::Model) -> BlogRecord {
    BlogRecord {
        id: model.id,
        title: model.title,
        slug: model.slug,
        content: model.content,
        excerpt: model.excerpt,
        featured_image: model.featured_image,
        // Legacy or hand-edited rows degrade to no tags.
        tags: codec::decode_or(Some(&model.tags), vec![]),
        published: model.published,
        published_at: model.published_at.map(Into::into),
        seo_title: model.seo_title,
        seo_desc: model.seo_desc,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn to_json_text<T: serde::Serialize>(data: &T) -> Result<String, BlogRepositoryError> {
    codec::encode(data).map_err(|e| BlogRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> BlogRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        BlogRepositoryError::SlugAlreadyExists
    } else {
        BlogRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> BlogRepositoryError {
    BlogRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_test_blog_data() -> CreateBlogData {
        CreateBlogData {
            title: "Field Notes".to_string(),
            slug: "field-notes".to_string(),
            content: "# Notes".to_string(),
            excerpt: Some("Short".to_string()),
            featured_image: None,
            tags: vec!["rust".to_string(), "gis".to_string()],
            published: false,
            seo_title: None,
            seo_desc: None,
        }
    }

    fn mock_blog_model(id: Uuid, title: &str, slug: &str, tags: &str) -> blogs::Model {
        let now = Utc::now().fixed_offset();

        blogs::Model {
            id,
            title: title.to_string(),
            slug: slug.to_string(),
            content: "# Notes".to_string(),
            excerpt: Some("Short".to_string()),
            featured_image: None,
            tags: tags.to_string(),
            published: false,
            published_at: None,
            seo_title: None,
            seo_desc: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_blog_success_decodes_tags() {
        let model = mock_blog_model(
            Uuid::new_v4(),
            "Field Notes",
            "field-notes",
            r#"["rust","gis"]"#,
        );

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let blog = repo.create_blog(create_test_blog_data()).await.unwrap();

        assert_eq!(blog.slug, "field-notes");
        assert_eq!(blog.tags, vec!["rust", "gis"]);
    }

    #[tokio::test]
    async fn test_create_blog_slug_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_blogs_slug_unique\""
                    .to_string(),
            )])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_blog(create_test_blog_data()).await;

        assert!(matches!(
            result.unwrap_err(),
            BlogRepositoryError::SlugAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_update_blog_corrupt_tags_degrade_to_empty() {
        let model = mock_blog_model(Uuid::new_v4(), "Field Notes", "field-notes", "{broken");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let blog = repo
            .update_blog(
                Uuid::new_v4(),
                UpdateBlogData {
                    title: Some("Edited".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(blog.tags.is_empty());
    }

    #[tokio::test]
    async fn test_update_blog_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blogs::Model>::new()])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_blog(
                Uuid::new_v4(),
                UpdateBlogData {
                    title: Some("Edited".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), BlogRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_blog_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blogs::Model>::new()])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete_blog(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), BlogRepositoryError::NotFound));
    }
}
