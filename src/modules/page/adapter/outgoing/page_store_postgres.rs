use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::modules::page::adapter::outgoing::sea_orm_entity::pages::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::page::application::domain::sections::PageContent;
use crate::modules::page::application::ports::outgoing::page_store::{
    PageContentInput, PageQuery, PageRecord, PageRepository, PageStoreError, UpdatePageData,
};
use crate::shared::codec;
use crate::shared::patch::PatchField;

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct PageStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl PageStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PageQuery for PageStorePostgres {
    async fn get_by_slug(&self, slug: &str) -> Result<PageRecord, PageStoreError> {
        let normalized = slug.trim().to_lowercase();

        let page = Entity::find()
            .filter(Column::Slug.eq(&normalized))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PageStoreError::NotFound)?;

        Ok(model_to_record(page))
    }
}

#[async_trait]
impl PageRepository for PageStorePostgres {
    async fn update_by_slug(
        &self,
        slug: &str,
        data: UpdatePageData,
    ) -> Result<PageRecord, PageStoreError> {
        let normalized = slug.trim().to_lowercase();

        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = data.title {
            model.title = Set(title.trim().to_string());
        }

        if let Some(content) = data.content {
            model.content = Set(encode_content(content)?);
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

        if let Some(enabled) = data.enabled {
            model.enabled = Set(enabled);
        }

        if let Some(sort_order) = data.sort_order {
            model.sort_order = Set(sort_order);
        }

        let has_changes = model.title.is_set()
            || model.content.is_set()
            || model.seo_title.is_set()
            || model.seo_desc.is_set()
            || model.enabled.is_set()
            || model.sort_order.is_set();

        if !has_changes {
            let page = Entity::find()
                .filter(Column::Slug.eq(&normalized))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(PageStoreError::NotFound)?;

            return Ok(model_to_record(page));
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Slug.eq(&normalized))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let page = results
            .into_iter()
            .next()
            .ok_or(PageStoreError::NotFound)?;

        Ok(model_to_record(page))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: pages::Model) -> PageRecord {
    // Corrupt or legacy content degrades to an empty section list rather
    // than failing the read.
    let content = codec::decode_or(Some(&model.content), PageContent::default());

    PageRecord {
        id: model.id,
        slug: model.slug,
        title: model.title,
        content,
        seo_title: model.seo_title,
        seo_desc: model.seo_desc,
        enabled: model.enabled,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn encode_content(input: PageContentInput) -> Result<String, PageStoreError> {
    match input {
        PageContentInput::Raw(text) => Ok(text),
        PageContentInput::Structured(content) => codec::encode(&content)
            .map_err(|e| PageStoreError::SerializationError(e.to_string())),
    }
}

fn map_db_err(e: DbErr) -> PageStoreError {
    PageStoreError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::page::application::domain::sections::SectionBody;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use uuid::Uuid;

    fn page_model(slug: &str, content: &str) -> pages::Model {
        let now = Utc::now().fixed_offset();
        pages::Model {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            title: "Home".to_string(),
            content: content.to_string(),
            seo_title: None,
            seo_desc: None,
            enabled: true,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    const HOME_CONTENT: &str = r#"{"sections":[
        {"id":"hero","type":"hero","enabled":true,"order":0,
         "data":{"title":"Welcome","subtitles":["Engineer"],"ctaText":"Go","ctaLink":"/projects"}}
    ]}"#;

    #[tokio::test]
    async fn test_get_by_slug_decodes_content() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![page_model("home", HOME_CONTENT)]])
            .into_connection();

        let store = PageStorePostgres::new(Arc::new(db));
        let page = store.get_by_slug("home").await.unwrap();

        assert_eq!(page.slug, "home");
        assert_eq!(page.content.sections.len(), 1);
        assert!(matches!(
            page.content.sections[0].body,
            SectionBody::Hero(_)
        ));
    }

    #[tokio::test]
    async fn test_get_by_slug_corrupt_content_degrades_to_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![page_model("home", "{broken")]])
            .into_connection();

        let store = PageStorePostgres::new(Arc::new(db));
        let page = store.get_by_slug("home").await.unwrap();

        assert!(page.content.sections.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_slug_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<pages::Model>::new()])
            .into_connection();

        let store = PageStorePostgres::new(Arc::new(db));
        let result = store.get_by_slug("nope").await;

        assert!(matches!(result.unwrap_err(), PageStoreError::NotFound));
    }

    #[tokio::test]
    async fn test_update_title_returns_updated_record() {
        let mut updated = page_model("home", HOME_CONTENT);
        updated.title = "New Home".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![updated]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let store = PageStorePostgres::new(Arc::new(db));
        let page = store
            .update_by_slug(
                "home",
                UpdatePageData {
                    title: Some("New Home".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(page.title, "New Home");
    }

    #[tokio::test]
    async fn test_update_no_changes_returns_current_state() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![page_model("home", HOME_CONTENT)]])
            .into_connection();

        let store = PageStorePostgres::new(Arc::new(db));
        let page = store
            .update_by_slug("home", UpdatePageData::default())
            .await
            .unwrap();

        assert_eq!(page.title, "Home");
    }

    #[test]
    fn test_encode_content_passes_raw_string_through() {
        let encoded = encode_content(PageContentInput::Raw("{\"sections\":[]}".to_string()));
        assert_eq!(encoded.unwrap(), "{\"sections\":[]}");
    }

    #[test]
    fn test_encode_content_encodes_structured_sections() {
        let encoded = encode_content(PageContentInput::Structured(PageContent::default())).unwrap();
        assert_eq!(encoded, "{\"sections\":[]}");
    }
}
