use std::sync::Arc;

use crate::modules::project::application::use_cases::{
    create_project::CreateProjectUseCase, delete_project::DeleteProjectUseCase,
    get_project::GetProjectUseCase, list_projects::ListProjectsUseCase,
    update_project::UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub get: Arc<dyn GetProjectUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}
