use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::project::application::ports::outgoing::project_query::ProjectListFilter;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, UpdateProjectData,
};
use crate::modules::project::application::use_cases::{
    create_project::CreateProjectError, delete_project::DeleteProjectError,
    get_project::GetProjectError, list_projects::ListProjectsError,
    update_project::UpdateProjectError,
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
pub struct ProjectListParams {
    /// `featured=true` narrows to the featured set (home page).
    pub featured: Option<bool>,
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub slug: String,
    pub overview: String,
    pub problem: Option<String>,
    pub process: Option<String>,
    pub solution: Option<String>,
    pub result: Option<String>,
    /// Accepts an array or the admin form's comma-separated string.
    #[serde(default, deserialize_with = "codec::opt_comma_list")]
    pub tech_stack: Option<Vec<String>>,
    /// Accepts an array or one URL per line.
    #[serde(default, deserialize_with = "codec::opt_newline_list")]
    pub image_gallery: Option<Vec<String>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
    pub seo_title: Option<String>,
    pub seo_desc: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub overview: Option<String>,
    #[serde(default)]
    pub problem: PatchField<String>,
    #[serde(default)]
    pub process: PatchField<String>,
    #[serde(default)]
    pub solution: PatchField<String>,
    #[serde(default)]
    pub result: PatchField<String>,
    #[serde(default, deserialize_with = "codec::opt_comma_list")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default, deserialize_with = "codec::opt_newline_list")]
    pub image_gallery: Option<Vec<String>>,
    pub featured: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
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

#[get("/api/projects")]
pub async fn list_projects_handler(
    params: web::Query<ProjectListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ProjectListFilter {
        featured_only: params.featured == Some(true),
        limit: params.limit,
    };

    match data.project.list.execute(filter).await {
        Ok(projects) => ApiResponse::success(projects),

        Err(ListProjectsError::RepositoryError(e)) => {
            error!("Repository error listing projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/projects/{slug}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.project.get.execute(&slug).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetProjectError::ProjectNotFound) => ApiResponse::not_found("Project not found"),

        Err(GetProjectError::RepositoryError(e)) => {
            error!("Repository error fetching project {}: {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/projects")]
pub async fn create_project_handler(
    _session: AdminSession,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let project_data = CreateProjectData {
        title: req.title,
        slug: req.slug,
        overview: req.overview,
        problem: req.problem,
        process: req.process,
        solution: req.solution,
        result: req.result,
        tech_stack: req.tech_stack.unwrap_or_default(),
        image_gallery: req.image_gallery.unwrap_or_default(),
        featured: req.featured,
        sort_order: req.sort_order,
        seo_title: req.seo_title,
        seo_desc: req.seo_desc,
    };

    match data.project.create.execute(project_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::SlugAlreadyExists) => {
            ApiResponse::conflict("Project slug already exists")
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();
    let req = req.into_inner();

    let update = UpdateProjectData {
        title: req.title,
        overview: req.overview,
        problem: req.problem,
        process: req.process,
        solution: req.solution,
        result: req.result,
        tech_stack: req.tech_stack,
        image_gallery: req.image_gallery,
        featured: req.featured,
        sort_order: req.sort_order,
        seo_title: req.seo_title,
        seo_desc: req.seo_desc,
    };

    match data.project.update.execute(project_id, update).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateProjectError::ProjectNotFound) => ApiResponse::not_found("Project not found"),

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.delete.execute(project_id).await {
        Ok(()) => ApiResponse::success_empty(),

        Err(DeleteProjectError::ProjectNotFound) => ApiResponse::not_found("Project not found"),

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
