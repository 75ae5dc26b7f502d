use actix_web::cookie::Cookie;
use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::SESSION_COOKIE;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtSessionService};
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

pub const TEST_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

pub fn jwt_session_service() -> JwtSessionService {
    JwtSessionService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "portfolio-backend".to_string(),
        session_expiry: 3600,
    })
}

/// The token service app_data the `AdminSession` extractor looks up.
pub fn test_token_service() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_session_service());
    web::Data::new(provider)
}

/// A valid session cookie for the fixed test user.
pub fn session_cookie() -> Cookie<'static> {
    let user_id = Uuid::parse_str(TEST_USER_ID).unwrap();
    let token = jwt_session_service()
        .issue_session_token(user_id)
        .expect("test token should sign");

    Cookie::new(SESSION_COOKIE, token)
}
