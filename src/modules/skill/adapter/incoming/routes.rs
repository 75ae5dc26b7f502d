use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    CreateSkillData, UpdateSkillData,
};
use crate::modules::skill::application::use_cases::{
    create_skill::CreateSkillError, delete_skill::DeleteSkillError, list_skills::ListSkillsError,
    update_skill::UpdateSkillError,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSkillRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub icon: PatchField<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

#[get("/api/skills")]
pub async fn list_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.list.execute().await {
        Ok(skills) => ApiResponse::success(skills),

        Err(ListSkillsError::RepositoryError(e)) => {
            error!("Repository error listing skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/skills")]
pub async fn create_skill_handler(
    _session: AdminSession,
    req: web::Json<CreateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let skill_data = CreateSkillData {
        name: req.name,
        category: req.category,
        icon: req.icon,
        sort_order: req.sort_order,
    };

    match data.skill.create.execute(skill_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateSkillError::RepositoryError(e)) => {
            error!("Repository error creating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<UpdateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();
    let req = req.into_inner();

    let update = UpdateSkillData {
        name: req.name,
        category: req.category,
        icon: req.icon,
        sort_order: req.sort_order,
    };

    match data.skill.update.execute(skill_id, update).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateSkillError::SkillNotFound) => ApiResponse::not_found("Skill not found"),

        Err(UpdateSkillError::RepositoryError(e)) => {
            error!("Repository error updating skill {}: {}", skill_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();

    match data.skill.delete.execute(skill_id).await {
        Ok(()) => ApiResponse::success_empty(),

        Err(DeleteSkillError::SkillNotFound) => ApiResponse::not_found("Skill not found"),

        Err(DeleteSkillError::RepositoryError(e)) => {
            error!("Repository error deleting skill {}: {}", skill_id, e);
            ApiResponse::internal_error()
        }
    }
}
