use actix_web::{delete, get, post, put, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::experience::application::domain::entities::ExperienceType;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceListFilter;
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, UpdateExperienceData,
};
use crate::modules::experience::application::use_cases::{
    create_experience::CreateExperienceError, delete_experience::DeleteExperienceError,
    list_experience::ListExperienceError, update_experience::UpdateExperienceError,
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
pub struct ExperienceListParams {
    /// `visible=true` narrows to the public timeline; the admin omits it.
    pub visible: Option<bool>,
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    pub role: String,
    pub organization: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Accepts an array or the admin form's one-bullet-per-line string.
    #[serde(default, deserialize_with = "codec::opt_newline_list")]
    pub description: Option<Vec<String>>,
    #[serde(rename = "type", default)]
    pub kind: ExperienceType,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperienceRequest {
    pub role: Option<String>,
    pub organization: Option<String>,
    #[serde(default)]
    pub location: PatchField<String>,
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
    #[serde(default, deserialize_with = "codec::opt_newline_list")]
    pub description: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: Option<ExperienceType>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub visible: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/api/experience")]
pub async fn list_experience_handler(
    params: web::Query<ExperienceListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ExperienceListFilter {
        visible_only: params.visible == Some(true),
        limit: params.limit,
    };

    match data.experience.list.execute(filter).await {
        Ok(experiences) => ApiResponse::success(experiences),

        Err(ListExperienceError::RepositoryError(e)) => {
            error!("Repository error listing experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/experience")]
pub async fn create_experience_handler(
    _session: AdminSession,
    req: web::Json<CreateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let experience_data = CreateExperienceData {
        role: req.role,
        organization: req.organization,
        location: req.location,
        start_date: req.start_date,
        end_date: req.end_date,
        description: req.description.unwrap_or_default(),
        kind: req.kind,
        sort_order: req.sort_order,
        visible: req.visible,
    };

    match data.experience.create.execute(experience_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateExperienceError::RepositoryError(e)) => {
            error!("Repository error creating experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/experience/{id}")]
pub async fn update_experience_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<UpdateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = path.into_inner();
    let req = req.into_inner();

    let update = UpdateExperienceData {
        role: req.role,
        organization: req.organization,
        location: req.location,
        start_date: req.start_date,
        end_date: req.end_date,
        description: req.description,
        kind: req.kind,
        sort_order: req.sort_order,
        visible: req.visible,
    };

    match data.experience.update.execute(experience_id, update).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateExperienceError::ExperienceNotFound) => {
            ApiResponse::not_found("Experience not found")
        }

        Err(UpdateExperienceError::RepositoryError(e)) => {
            error!(
                "Repository error updating experience {}: {}",
                experience_id, e
            );
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/experience/{id}")]
pub async fn delete_experience_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = path.into_inner();

    match data.experience.delete.execute(experience_id).await {
        Ok(()) => ApiResponse::success_empty(),

        Err(DeleteExperienceError::ExperienceNotFound) => {
            ApiResponse::not_found("Experience not found")
        }

        Err(DeleteExperienceError::RepositoryError(e)) => {
            error!(
                "Repository error deleting experience {}: {}",
                experience_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
