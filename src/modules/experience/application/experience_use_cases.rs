use std::sync::Arc;

use crate::modules::experience::application::use_cases::{
    create_experience::CreateExperienceUseCase, delete_experience::DeleteExperienceUseCase,
    list_experience::ListExperienceUseCase, update_experience::UpdateExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub list: Arc<dyn ListExperienceUseCase + Send + Sync>,
    pub create: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
}
