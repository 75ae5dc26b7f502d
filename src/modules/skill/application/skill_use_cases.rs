use std::sync::Arc;

use crate::modules::skill::application::use_cases::{
    create_skill::CreateSkillUseCase, delete_skill::DeleteSkillUseCase,
    list_skills::ListSkillsUseCase, update_skill::UpdateSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub list: Arc<dyn ListSkillsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
}
