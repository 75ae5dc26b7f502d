use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Name of the single session cookie. The admin UI gate and the API
/// extractor both read it; login is the only writer.
pub const SESSION_COOKIE: &str = "admin_session";

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Extractor for mutating admin routes: resolves the session cookie to a
/// verified user id or rejects with a 401 envelope.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user_id: Uuid,
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_service =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match req.cookie(SESSION_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Unauthorized",
                ))));
            }
        };

        match token_service.verify_session_token(&token) {
            Ok(user_id) => ready(Ok(AdminSession { user_id })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "Unauthorized",
            )))),
        }
    }
}
