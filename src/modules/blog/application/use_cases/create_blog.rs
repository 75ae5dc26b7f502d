use async_trait::async_trait;
use std::fmt;

use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogRecord, BlogRepository, BlogRepositoryError, CreateBlogData,
};

#[derive(Debug, Clone)]
pub enum CreateBlogError {
    SlugAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for CreateBlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateBlogError::SlugAlreadyExists => write!(f, "slug already exists"),
            CreateBlogError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateBlogUseCase: Send + Sync {
    async fn execute(&self, data: CreateBlogData) -> Result<BlogRecord, CreateBlogError>;
}

pub struct CreateBlogService<R>
where
    R: BlogRepository,
{
    blog_repository: R,
}

impl<R> CreateBlogService<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repository: R) -> Self {
        Self { blog_repository }
    }
}

#[async_trait]
impl<R> CreateBlogUseCase for CreateBlogService<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, data: CreateBlogData) -> Result<BlogRecord, CreateBlogError> {
        self.blog_repository
            .create_blog(data)
            .await
            .map_err(|e| match e {
                BlogRepositoryError::SlugAlreadyExists => CreateBlogError::SlugAlreadyExists,
                BlogRepositoryError::DatabaseError(msg) => CreateBlogError::RepositoryError(msg),
                BlogRepositoryError::SerializationError(msg) => {
                    CreateBlogError::RepositoryError(msg)
                }
                // Defensive: should never happen on create
                BlogRepositoryError::NotFound => CreateBlogError::RepositoryError(
                    "unexpected not found while creating blog".to_string(),
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockBlogRepo {
        result: Result<BlogRecord, BlogRepositoryError>,
    }

    #[async_trait]
    impl BlogRepository for MockBlogRepo {
        async fn create_blog(
            &self,
            _data: CreateBlogData,
        ) -> Result<BlogRecord, BlogRepositoryError> {
            self.result.clone()
        }

        async fn update_blog(
            &self,
            _blog_id: Uuid,
            _data: crate::modules::blog::application::ports::outgoing::blog_repository::UpdateBlogData,
        ) -> Result<BlogRecord, BlogRepositoryError> {
            unimplemented!("not needed for create_blog tests")
        }

        async fn delete_blog(&self, _blog_id: Uuid) -> Result<(), BlogRepositoryError> {
            unimplemented!("not needed for create_blog tests")
        }
    }

    fn sample_create_data() -> CreateBlogData {
        CreateBlogData {
            title: "Post".to_string(),
            slug: "post".to_string(),
            content: "# Post".to_string(),
            excerpt: None,
            featured_image: None,
            tags: vec!["rust".to_string()],
            published: false,
            seo_title: None,
            seo_desc: None,
        }
    }

    fn sample_record() -> BlogRecord {
        BlogRecord {
            id: Uuid::new_v4(),
            title: "Post".to_string(),
            slug: "post".to_string(),
            content: "# Post".to_string(),
            excerpt: None,
            featured_image: None,
            tags: vec!["rust".to_string()],
            published: false,
            published_at: None,
            seo_title: None,
            seo_desc: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_execute_success() {
        let service = CreateBlogService::new(MockBlogRepo {
            result: Ok(sample_record()),
        });

        let result = service.execute(sample_create_data()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_maps_slug_already_exists() {
        let service = CreateBlogService::new(MockBlogRepo {
            result: Err(BlogRepositoryError::SlugAlreadyExists),
        });

        let result = service.execute(sample_create_data()).await;

        assert!(matches!(
            result.unwrap_err(),
            CreateBlogError::SlugAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_execute_maps_database_error() {
        let service = CreateBlogService::new(MockBlogRepo {
            result: Err(BlogRepositoryError::DatabaseError("db down".to_string())),
        });

        let result = service.execute(sample_create_data()).await;

        assert!(matches!(
            result.unwrap_err(),
            CreateBlogError::RepositoryError(msg) if msg == "db down"
        ));
    }
}
