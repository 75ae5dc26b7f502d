use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::blog::application::ports::outgoing::blog_query::BlogListFilter;
use crate::modules::blog::application::ports::outgoing::blog_repository::{
    CreateBlogData, UpdateBlogData,
};
use crate::modules::blog::application::use_cases::{
    create_blog::CreateBlogError, delete_blog::DeleteBlogError, get_blog::GetBlogError,
    list_blogs::ListBlogsError, update_blog::UpdateBlogError,
};
use crate::shared::api::ApiResponse;
use crate::shared::codec;
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct BlogListParams {
    /// `published=true` narrows to published posts (public surfaces).
    pub published: Option<bool>,
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    /// Accepts an array or the admin form's comma-separated string.
    #[serde(default, deserialize_with = "codec::opt_comma_list")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub published: bool,
    pub seo_title: Option<String>,
    pub seo_desc: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: PatchField<String>,
    #[serde(default)]
    pub featured_image: PatchField<String>,
    #[serde(default, deserialize_with = "codec::opt_comma_list")]
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    #[serde(default)]
    pub seo_title: PatchField<String>,
    #[serde(default)]
    pub seo_desc: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/api/blogs")]
pub async fn list_blogs_handler(
    params: web::Query<BlogListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = BlogListFilter {
        published_only: params.published == Some(true),
        limit: params.limit,
    };

    match data.blog.list.execute(filter).await {
        Ok(blogs) => ApiResponse::success(blogs),

        Err(ListBlogsError::RepositoryError(e)) => {
            error!("Repository error listing blogs: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/blogs/{slug}")]
pub async fn get_blog_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.blog.get.execute(&slug).await {
        Ok(blog) => ApiResponse::success(blog),

        Err(GetBlogError::BlogNotFound) => ApiResponse::not_found("Blog not found"),

        Err(GetBlogError::RepositoryError(e)) => {
            error!("Repository error fetching blog {}: {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/blogs")]
pub async fn create_blog_handler(
    _session: AdminSession,
    req: web::Json<CreateBlogRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let blog_data = CreateBlogData {
        title: req.title,
        slug: req.slug,
        content: req.content,
        excerpt: req.excerpt,
        featured_image: req.featured_image,
        tags: req.tags.unwrap_or_default(),
        published: req.published,
        seo_title: req.seo_title,
        seo_desc: req.seo_desc,
    };

    match data.blog.create.execute(blog_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateBlogError::SlugAlreadyExists) => {
            ApiResponse::conflict("Blog slug already exists")
        }

        Err(CreateBlogError::RepositoryError(e)) => {
            error!("Repository error creating blog: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/blogs/{id}")]
pub async fn update_blog_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<UpdateBlogRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blog_id = path.into_inner();
    let req = req.into_inner();

    let update = UpdateBlogData {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        featured_image: req.featured_image,
        tags: req.tags,
        published: req.published,
        // Stamped by the use case, never by the client.
        published_at: PatchField::Unset,
        seo_title: req.seo_title,
        seo_desc: req.seo_desc,
    };

    match data.blog.update.execute(blog_id, update).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateBlogError::BlogNotFound) => ApiResponse::not_found("Blog not found"),

        Err(UpdateBlogError::RepositoryError(e)) => {
            error!("Repository error updating blog {}: {}", blog_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/blogs/{id}")]
pub async fn delete_blog_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blog_id = path.into_inner();

    match data.blog.delete.execute(blog_id).await {
        Ok(()) => ApiResponse::success_empty(),

        Err(DeleteBlogError::BlogNotFound) => ApiResponse::not_found("Blog not found"),

        Err(DeleteBlogError::RepositoryError(e)) => {
            error!("Repository error deleting blog {}: {}", blog_id, e);
            ApiResponse::internal_error()
        }
    }
}
