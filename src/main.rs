pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::auth::adapter::incoming::web::admin_gate::AdminGate;
use crate::modules::auth::adapter::outgoing::argon2_hasher::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtSessionService};
use crate::modules::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::use_cases::fetch_current_user::FetchCurrentUserService;
use crate::modules::auth::application::use_cases::login_user::LoginUserService;

use crate::modules::blog::adapter::outgoing::blog_query_postgres::BlogQueryPostgres;
use crate::modules::blog::adapter::outgoing::blog_repository_postgres::BlogRepositoryPostgres;
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::use_cases::{
    create_blog::CreateBlogService, delete_blog::DeleteBlogService, get_blog::GetBlogService,
    list_blogs::ListBlogsService, update_blog::UpdateBlogService,
};

use crate::modules::experience::adapter::outgoing::experience_query_postgres::ExperienceQueryPostgres;
use crate::modules::experience::adapter::outgoing::experience_repository_postgres::ExperienceRepositoryPostgres;
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::use_cases::{
    create_experience::CreateExperienceService, delete_experience::DeleteExperienceService,
    list_experience::ListExperienceService, update_experience::UpdateExperienceService,
};

use crate::modules::page::adapter::outgoing::page_store_postgres::PageStorePostgres;
use crate::modules::page::application::page_use_cases::PageUseCases;
use crate::modules::page::application::use_cases::{
    get_page::GetPageService, update_page::UpdatePageService,
};

use crate::modules::project::adapter::outgoing::project_query_postgres::ProjectQueryPostgres;
use crate::modules::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::use_cases::{
    create_project::CreateProjectService, delete_project::DeleteProjectService,
    get_project::GetProjectService, list_projects::ListProjectsService,
    update_project::UpdateProjectService,
};

use crate::modules::settings::adapter::outgoing::settings_store_postgres::SettingsStorePostgres;
use crate::modules::settings::application::settings_use_cases::SettingsUseCases;
use crate::modules::settings::application::use_cases::{
    get_settings::GetSettingsService, update_settings::UpdateSettingsService,
};

use crate::modules::skill::adapter::outgoing::skill_store_postgres::SkillStorePostgres;
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::skill::application::use_cases::{
    create_skill::CreateSkillService, delete_skill::DeleteSkillService,
    list_skills::ListSkillsService, update_skill::UpdateSkillService,
};

use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub settings: SettingsUseCases,
    pub page: PageUseCases,
    pub blog: BlogUseCases,
    pub project: ProjectUseCases,
    pub experience: ExperienceUseCases,
    pub skill: SkillUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Session token signing + password hashing
    let jwt_service = JwtSessionService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher = Arc::new(Argon2Hasher::from_env());

    // Auth
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let auth = AuthUseCases {
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            password_hasher,
            Arc::clone(&token_provider_arc),
        )),
        current_user: Arc::new(FetchCurrentUserService::new(user_query)),
    };

    // Settings
    let settings_store = SettingsStorePostgres::new(Arc::clone(&db_arc));
    let settings = SettingsUseCases {
        get: Arc::new(GetSettingsService::new(settings_store.clone())),
        update: Arc::new(UpdateSettingsService::new(
            settings_store.clone(),
            settings_store,
        )),
    };

    // Pages
    let page_store = PageStorePostgres::new(Arc::clone(&db_arc));
    let page = PageUseCases {
        get: Arc::new(GetPageService::new(page_store.clone())),
        update: Arc::new(UpdatePageService::new(page_store)),
    };

    // Blogs
    let blog_repo = BlogRepositoryPostgres::new(Arc::clone(&db_arc));
    let blog_query = BlogQueryPostgres::new(Arc::clone(&db_arc));
    let blog = BlogUseCases {
        list: Arc::new(ListBlogsService::new(blog_query.clone())),
        get: Arc::new(GetBlogService::new(blog_query.clone())),
        create: Arc::new(CreateBlogService::new(blog_repo.clone())),
        update: Arc::new(UpdateBlogService::new(blog_repo.clone(), blog_query)),
        delete: Arc::new(DeleteBlogService::new(blog_repo)),
    };

    // Projects
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let project = ProjectUseCases {
        list: Arc::new(ListProjectsService::new(project_query.clone())),
        get: Arc::new(GetProjectService::new(project_query)),
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        update: Arc::new(UpdateProjectService::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
    };

    // Experience
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience_query = ExperienceQueryPostgres::new(Arc::clone(&db_arc));
    let experience = ExperienceUseCases {
        list: Arc::new(ListExperienceService::new(experience_query)),
        create: Arc::new(CreateExperienceService::new(experience_repo.clone())),
        update: Arc::new(UpdateExperienceService::new(experience_repo.clone())),
        delete: Arc::new(DeleteExperienceService::new(experience_repo)),
    };

    // Skills
    let skill_store = SkillStorePostgres::new(Arc::clone(&db_arc));
    let skill = SkillUseCases {
        list: Arc::new(ListSkillsService::new(skill_store.clone())),
        create: Arc::new(CreateSkillService::new(skill_store.clone())),
        update: Arc::new(UpdateSkillService::new(skill_store.clone())),
        delete: Arc::new(DeleteSkillService::new(skill_store)),
    };

    let state = AppState {
        auth,
        settings,
        page,
        blog,
        project,
        experience,
        skill,
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::modules::auth::adapter::incoming::routes::login_handler);
    cfg.service(crate::modules::auth::adapter::incoming::routes::logout_handler);
    cfg.service(crate::modules::auth::adapter::incoming::routes::me_handler);
    // Settings
    cfg.service(crate::modules::settings::adapter::incoming::routes::get_settings_handler);
    cfg.service(crate::modules::settings::adapter::incoming::routes::update_settings_handler);
    // Pages
    cfg.service(crate::modules::page::adapter::incoming::routes::get_page_handler);
    cfg.service(crate::modules::page::adapter::incoming::routes::update_page_handler);
    // Blogs
    cfg.service(crate::modules::blog::adapter::incoming::routes::list_blogs_handler);
    cfg.service(crate::modules::blog::adapter::incoming::routes::get_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::routes::create_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::routes::update_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::routes::delete_blog_handler);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::routes::list_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::routes::get_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::routes::create_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::routes::update_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::routes::delete_project_handler);
    // Experience
    cfg.service(crate::modules::experience::adapter::incoming::routes::list_experience_handler);
    cfg.service(crate::modules::experience::adapter::incoming::routes::create_experience_handler);
    cfg.service(crate::modules::experience::adapter::incoming::routes::update_experience_handler);
    cfg.service(crate::modules::experience::adapter::incoming::routes::delete_experience_handler);
    // Skills
    cfg.service(crate::modules::skill::adapter::incoming::routes::list_skills_handler);
    cfg.service(crate::modules::skill::adapter::incoming::routes::create_skill_handler);
    cfg.service(crate::modules::skill::adapter::incoming::routes::update_skill_handler);
    cfg.service(crate::modules::skill::adapter::incoming::routes::delete_skill_handler);
    // Admin UI shell, behind the cookie-presence gate
    cfg.service(
        web::scope("/admin")
            .wrap(AdminGate)
            .service(crate::modules::auth::adapter::incoming::routes::admin_login_page)
            .service(crate::modules::auth::adapter::incoming::routes::admin_shell),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
