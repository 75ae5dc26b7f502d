use async_trait::async_trait;
use std::fmt;

use crate::modules::page::application::ports::outgoing::page_store::{
    PageQuery, PageRecord, PageStoreError,
};

#[derive(Debug, Clone)]
pub enum GetPageError {
    PageNotFound,
    RepositoryError(String),
}

impl fmt::Display for GetPageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetPageError::PageNotFound => write!(f, "page not found"),
            GetPageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetPageUseCase: Send + Sync {
    /// `resolve` = display form: enabled sections only, ordered, unknown
    /// tags dropped. The admin editor reads the raw list instead.
    async fn execute(&self, slug: &str, resolve: bool) -> Result<PageRecord, GetPageError>;
}

pub struct GetPageService<Q>
where
    Q: PageQuery,
{
    page_query: Q,
}

impl<Q> GetPageService<Q>
where
    Q: PageQuery,
{
    pub fn new(page_query: Q) -> Self {
        Self { page_query }
    }
}

#[async_trait]
impl<Q> GetPageUseCase for GetPageService<Q>
where
    Q: PageQuery + Send + Sync,
{
    async fn execute(&self, slug: &str, resolve: bool) -> Result<PageRecord, GetPageError> {
        let mut page = self
            .page_query
            .get_by_slug(slug)
            .await
            .map_err(|e| match e {
                PageStoreError::NotFound => GetPageError::PageNotFound,
                PageStoreError::DatabaseError(msg) => GetPageError::RepositoryError(msg),
                PageStoreError::SerializationError(msg) => GetPageError::RepositoryError(msg),
            })?;

        if resolve {
            page.content = page.content.resolved();
        }

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::page::application::domain::sections::{
        EmptyData, PageContent, Section, SectionBody,
    };
    use chrono::Utc;
    use uuid::Uuid;

    fn page_with_sections(sections: Vec<Section>) -> PageRecord {
        PageRecord {
            id: Uuid::new_v4(),
            slug: "home".to_string(),
            title: "Home".to_string(),
            content: PageContent { sections },
            seo_title: None,
            seo_desc: None,
            enabled: true,
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    struct MockPageQuery {
        result: Result<PageRecord, PageStoreError>,
    }

    #[async_trait]
    impl PageQuery for MockPageQuery {
        async fn get_by_slug(&self, _slug: &str) -> Result<PageRecord, PageStoreError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_resolved_view_filters_disabled_sections() {
        let sections = vec![
            Section {
                id: "skills".to_string(),
                enabled: false,
                order: 0,
                body: SectionBody::Skills(EmptyData {}),
            },
            Section {
                id: "blogs".to_string(),
                enabled: true,
                order: 1,
                body: SectionBody::Blogs(EmptyData {}),
            },
        ];
        let service = GetPageService::new(MockPageQuery {
            result: Ok(page_with_sections(sections)),
        });

        let page = service.execute("home", true).await.unwrap();

        assert_eq!(page.content.sections.len(), 1);
        assert_eq!(page.content.sections[0].id, "blogs");
    }

    #[tokio::test]
    async fn test_raw_view_preserves_disabled_sections() {
        let sections = vec![Section {
            id: "skills".to_string(),
            enabled: false,
            order: 0,
            body: SectionBody::Skills(EmptyData {}),
        }];
        let service = GetPageService::new(MockPageQuery {
            result: Ok(page_with_sections(sections)),
        });

        let page = service.execute("home", false).await.unwrap();

        assert_eq!(page.content.sections.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_page_maps_to_not_found() {
        let service = GetPageService::new(MockPageQuery {
            result: Err(PageStoreError::NotFound),
        });

        let result = service.execute("nope", false).await;

        assert!(matches!(result.unwrap_err(), GetPageError::PageNotFound));
    }
}
