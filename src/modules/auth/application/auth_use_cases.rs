use std::sync::Arc;

use crate::modules::auth::application::use_cases::{
    fetch_current_user::FetchCurrentUserUseCase, login_user::LoginUserUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub current_user: Arc<dyn FetchCurrentUserUseCase + Send + Sync>,
}
