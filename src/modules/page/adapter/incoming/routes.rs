use actix_web::{get, put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::page::application::ports::outgoing::page_store::{
    PageContentInput, UpdatePageData,
};
use crate::modules::page::application::use_cases::get_page::GetPageError;
use crate::modules::page::application::use_cases::update_page::UpdatePageError;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct GetPageParams {
    /// `resolved=true` returns display-form sections: enabled only,
    /// ordered, unknown types dropped. Default is the raw stored list,
    /// which the admin editor round-trips.
    #[serde(default)]
    pub resolved: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageRequest {
    pub title: Option<String>,
    pub content: Option<PageContentInput>,
    #[serde(default)]
    pub seo_title: PatchField<String>,
    #[serde(default)]
    pub seo_desc: PatchField<String>,
    pub enabled: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/api/pages/{slug}")]
pub async fn get_page_handler(
    path: web::Path<String>,
    params: web::Query<GetPageParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.page.get.execute(&slug, params.resolved).await {
        Ok(page) => ApiResponse::success(page),

        Err(GetPageError::PageNotFound) => ApiResponse::not_found("Page not found"),

        Err(GetPageError::RepositoryError(e)) => {
            error!("Repository error fetching page {}: {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/pages/{slug}")]
pub async fn update_page_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<UpdatePageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();
    let req = req.into_inner();

    let update = UpdatePageData {
        title: req.title,
        content: req.content,
        seo_title: req.seo_title,
        seo_desc: req.seo_desc,
        enabled: req.enabled,
        sort_order: req.sort_order,
    };

    match data.page.update.execute(&slug, update).await {
        Ok(page) => ApiResponse::success(page),

        Err(UpdatePageError::PageNotFound) => ApiResponse::not_found("Page not found"),

        Err(UpdatePageError::RepositoryError(e)) => {
            error!("Repository error updating page {}: {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}
