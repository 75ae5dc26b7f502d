use std::sync::Arc;

use crate::modules::page::application::use_cases::{
    get_page::GetPageUseCase, update_page::UpdatePageUseCase,
};

#[derive(Clone)]
pub struct PageUseCases {
    pub get: Arc<dyn GetPageUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePageUseCase + Send + Sync>,
}
