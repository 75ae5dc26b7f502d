use std::sync::Arc;

use crate::modules::settings::application::use_cases::{
    get_settings::GetSettingsUseCase, update_settings::UpdateSettingsUseCase,
};

#[derive(Clone)]
pub struct SettingsUseCases {
    pub get: Arc<dyn GetSettingsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSettingsUseCase + Send + Sync>,
}
