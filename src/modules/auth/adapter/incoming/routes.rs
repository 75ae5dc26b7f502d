use actix_web::cookie::{Cookie, SameSite};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::auth::{
    AdminSession, SESSION_COOKIE,
};
use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::auth::application::use_cases::fetch_current_user::FetchCurrentUserError;
use crate::modules::auth::application::use_cases::login_user::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email address
    #[schema(example = "admin@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "admin123")]
    pub password: String,
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Admin login
///
/// Verifies credentials and sets the HttpOnly session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = UserSummary),
        (status = 401, description = "Invalid email or password")
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.login.execute(&req.email, &req.password).await {
        Ok(outcome) => {
            let cookie = session_cookie(outcome.session_token);
            HttpResponse::Ok().cookie(cookie).json(ApiResponse {
                success: true,
                data: Some(outcome.user),
                error: None,
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Rejected login attempt for {}", req.email);
            ApiResponse::unauthorized("Invalid email or password")
        }

        Err(LoginError::RepositoryError(e)) => {
            error!("Repository error during login: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Admin logout
///
/// Clears the session cookie. The token itself simply expires.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses((status = 200, description = "Session cookie cleared"))
)]
#[post("/api/auth/logout")]
pub async fn logout_handler() -> impl Responder {
    let mut removal = session_cookie(String::new());
    removal.make_removal();

    HttpResponse::Ok().cookie(removal).json(ApiResponse::<()> {
        success: true,
        data: None,
        error: None,
    })
}

/// Current session
///
/// Resolves the session cookie to the signed-in user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Signed-in user", body = UserSummary),
        (status = 401, description = "Missing or invalid session cookie")
    )
)]
#[get("/api/auth/me")]
pub async fn me_handler(session: AdminSession, data: web::Data<AppState>) -> impl Responder {
    match data.auth.current_user.execute(session.user_id).await {
        Ok(user) => ApiResponse::success(user),

        Err(FetchCurrentUserError::UserNotFound) => {
            ApiResponse::<()>::error(actix_web::http::StatusCode::UNAUTHORIZED, "User not found")
        }

        Err(FetchCurrentUserError::RepositoryError(e)) => {
            error!("Repository error resolving session user: {}", e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Admin UI shell
// ──────────────────────────────────────────────────────────
// Registered under the `/admin` scope behind the cookie-presence gate.
// The admin front-end is served elsewhere; these handlers only exist so
// the gate has concrete routes to protect.
//

#[get("/login")]
pub async fn admin_login_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<!doctype html><title>Admin login</title><h1>Sign in</h1>")
}

#[get("{tail:.*}")]
pub async fn admin_shell() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<!doctype html><title>Admin</title><h1>Admin</h1>")
}
