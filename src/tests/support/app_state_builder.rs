use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::use_cases::fetch_current_user::FetchCurrentUserUseCase;
use crate::modules::auth::application::use_cases::login_user::LoginUserUseCase;
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::use_cases::{
    create_blog::CreateBlogUseCase, delete_blog::DeleteBlogUseCase, get_blog::GetBlogUseCase,
    list_blogs::ListBlogsUseCase, update_blog::UpdateBlogUseCase,
};
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::use_cases::{
    create_experience::CreateExperienceUseCase, delete_experience::DeleteExperienceUseCase,
    list_experience::ListExperienceUseCase, update_experience::UpdateExperienceUseCase,
};
use crate::modules::page::application::page_use_cases::PageUseCases;
use crate::modules::page::application::use_cases::{
    get_page::GetPageUseCase, update_page::UpdatePageUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::use_cases::{
    create_project::CreateProjectUseCase, delete_project::DeleteProjectUseCase,
    get_project::GetProjectUseCase, list_projects::ListProjectsUseCase,
    update_project::UpdateProjectUseCase,
};
use crate::modules::settings::application::settings_use_cases::SettingsUseCases;
use crate::modules::settings::application::use_cases::{
    get_settings::GetSettingsUseCase, update_settings::UpdateSettingsUseCase,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::skill::application::use_cases::{
    create_skill::CreateSkillUseCase, delete_skill::DeleteSkillUseCase,
    list_skills::ListSkillsUseCase, update_skill::UpdateSkillUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every slot answers with a neutral stub;
/// tests override just the slots they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    settings: SettingsUseCases,
    page: PageUseCases,
    blog: BlogUseCases,
    project: ProjectUseCases,
    experience: ExperienceUseCases,
    skill: SkillUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                login: Arc::new(StubLoginUseCase),
                current_user: Arc::new(StubFetchCurrentUserUseCase),
            },
            settings: SettingsUseCases {
                get: Arc::new(StubGetSettingsUseCase),
                update: Arc::new(StubUpdateSettingsUseCase),
            },
            page: PageUseCases {
                get: Arc::new(StubGetPageUseCase),
                update: Arc::new(StubUpdatePageUseCase),
            },
            blog: BlogUseCases {
                list: Arc::new(StubListBlogsUseCase),
                get: Arc::new(StubGetBlogUseCase),
                create: Arc::new(StubCreateBlogUseCase),
                update: Arc::new(StubUpdateBlogUseCase),
                delete: Arc::new(StubDeleteBlogUseCase),
            },
            project: ProjectUseCases {
                list: Arc::new(StubListProjectsUseCase),
                get: Arc::new(StubGetProjectUseCase),
                create: Arc::new(StubCreateProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            experience: ExperienceUseCases {
                list: Arc::new(StubListExperienceUseCase),
                create: Arc::new(StubCreateExperienceUseCase),
                update: Arc::new(StubUpdateExperienceUseCase),
                delete: Arc::new(StubDeleteExperienceUseCase),
            },
            skill: SkillUseCases {
                list: Arc::new(StubListSkillsUseCase),
                create: Arc::new(StubCreateSkillUseCase),
                update: Arc::new(StubUpdateSkillUseCase),
                delete: Arc::new(StubDeleteSkillUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Auth

    pub fn with_login(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_current_user(mut self, uc: impl FetchCurrentUserUseCase + 'static) -> Self {
        self.auth.current_user = Arc::new(uc);
        self
    }

    // Settings

    pub fn with_get_settings(mut self, uc: impl GetSettingsUseCase + 'static) -> Self {
        self.settings.get = Arc::new(uc);
        self
    }

    pub fn with_update_settings(mut self, uc: impl UpdateSettingsUseCase + 'static) -> Self {
        self.settings.update = Arc::new(uc);
        self
    }

    // Pages

    pub fn with_get_page(mut self, uc: impl GetPageUseCase + 'static) -> Self {
        self.page.get = Arc::new(uc);
        self
    }

    pub fn with_update_page(mut self, uc: impl UpdatePageUseCase + 'static) -> Self {
        self.page.update = Arc::new(uc);
        self
    }

    // Blogs

    pub fn with_list_blogs(mut self, uc: impl ListBlogsUseCase + 'static) -> Self {
        self.blog.list = Arc::new(uc);
        self
    }

    pub fn with_get_blog(mut self, uc: impl GetBlogUseCase + 'static) -> Self {
        self.blog.get = Arc::new(uc);
        self
    }

    pub fn with_create_blog(mut self, uc: impl CreateBlogUseCase + 'static) -> Self {
        self.blog.create = Arc::new(uc);
        self
    }

    pub fn with_update_blog(mut self, uc: impl UpdateBlogUseCase + 'static) -> Self {
        self.blog.update = Arc::new(uc);
        self
    }

    pub fn with_delete_blog(mut self, uc: impl DeleteBlogUseCase + 'static) -> Self {
        self.blog.delete = Arc::new(uc);
        self
    }

    // Projects

    pub fn with_list_projects(mut self, uc: impl ListProjectsUseCase + 'static) -> Self {
        self.project.list = Arc::new(uc);
        self
    }

    pub fn with_get_project(mut self, uc: impl GetProjectUseCase + 'static) -> Self {
        self.project.get = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    // Experience

    pub fn with_list_experience(mut self, uc: impl ListExperienceUseCase + 'static) -> Self {
        self.experience.list = Arc::new(uc);
        self
    }

    pub fn with_create_experience(mut self, uc: impl CreateExperienceUseCase + 'static) -> Self {
        self.experience.create = Arc::new(uc);
        self
    }

    pub fn with_update_experience(mut self, uc: impl UpdateExperienceUseCase + 'static) -> Self {
        self.experience.update = Arc::new(uc);
        self
    }

    pub fn with_delete_experience(mut self, uc: impl DeleteExperienceUseCase + 'static) -> Self {
        self.experience.delete = Arc::new(uc);
        self
    }

    // Skills

    pub fn with_list_skills(mut self, uc: impl ListSkillsUseCase + 'static) -> Self {
        self.skill.list = Arc::new(uc);
        self
    }

    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + 'static) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    pub fn with_update_skill(mut self, uc: impl UpdateSkillUseCase + 'static) -> Self {
        self.skill.update = Arc::new(uc);
        self
    }

    pub fn with_delete_skill(mut self, uc: impl DeleteSkillUseCase + 'static) -> Self {
        self.skill.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            settings: self.settings,
            page: self.page,
            blog: self.blog,
            project: self.project,
            experience: self.experience,
            skill: self.skill,
        })
    }
}
