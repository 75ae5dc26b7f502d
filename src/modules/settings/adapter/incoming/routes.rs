use actix_web::{get, put, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::settings::application::domain::global_settings::{
    GlobalSettings, SettingsPatch,
};
use crate::modules::settings::application::use_cases::update_settings::UpdateSettingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Resolved global settings
///
/// Always returns a fully-populated object; unset keys come back as their
/// defaults.
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Resolved settings", body = GlobalSettings)
    )
)]
#[get("/api/settings")]
pub async fn get_settings_handler(data: web::Data<AppState>) -> impl Responder {
    let settings = data.settings.get.execute().await;
    ApiResponse::success(settings)
}

/// Partial settings update
///
/// Upserts only the provided fields and returns the re-resolved object.
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = "settings",
    request_body = SettingsPatch,
    responses(
        (status = 200, description = "Updated settings", body = GlobalSettings),
        (status = 401, description = "Missing or invalid session cookie")
    )
)]
#[put("/api/settings")]
pub async fn update_settings_handler(
    _session: AdminSession,
    req: web::Json<SettingsPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.settings.update.execute(req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(UpdateSettingsError::RepositoryError(e)) => {
            error!("Repository error updating settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
