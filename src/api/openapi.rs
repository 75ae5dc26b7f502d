use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorResponse, SuccessResponse};

// Auth
use crate::modules::auth::adapter::incoming::routes::LoginRequest;
use crate::modules::auth::application::domain::entities::UserSummary;

// Settings
use crate::modules::settings::application::domain::global_settings::{
    GlobalSettings, SettingsPatch, SocialLinks,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Backend API",
        version = "1.0.0",
        description = "Content API for the portfolio site and its admin back-office"
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::routes::login_handler,
        crate::modules::auth::adapter::incoming::routes::logout_handler,
        crate::modules::auth::adapter::incoming::routes::me_handler,

        // Settings endpoints
        crate::modules::settings::adapter::incoming::routes::get_settings_handler,
        crate::modules::settings::adapter::incoming::routes::update_settings_handler,

        // Content endpoints
        // get_page_handler,
        // update_page_handler,
        // list_blogs_handler,
        // get_blog_handler,
        // create_blog_handler,
        // update_blog_handler,
        // delete_blog_handler,
        // list_projects_handler,
        // get_project_handler,
        // create_project_handler,
        // update_project_handler,
        // delete_project_handler,
        // list_experience_handler,
        // create_experience_handler,
        // update_experience_handler,
        // delete_experience_handler,
        // list_skills_handler,
        // create_skill_handler,
        // update_skill_handler,
        // delete_skill_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<UserSummary>,
            ErrorResponse,

            // Auth DTOs
            LoginRequest,
            UserSummary,

            // Settings DTOs
            GlobalSettings,
            SettingsPatch,
            SocialLinks
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Session endpoints"),
        (name = "settings", description = "Global settings endpoints"),
        (name = "pages", description = "Page content endpoints"),
        (name = "blogs", description = "Blog endpoints"),
        (name = "projects", description = "Project endpoints"),
        (name = "experience", description = "Experience endpoints"),
        (name = "skills", description = "Skill endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "SessionCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("admin_session"))),
            )
        }
    }
}
