//! Default use-case stubs for route tests. Each test overrides the one
//! slot it exercises; everything else answers with a neutral default.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::auth::application::use_cases::fetch_current_user::{
    FetchCurrentUserError, FetchCurrentUserUseCase,
};
use crate::modules::auth::application::use_cases::login_user::{
    LoginError, LoginOutcome, LoginUserUseCase,
};
use crate::modules::blog::application::ports::outgoing::blog_query::BlogListFilter;
use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogRecord, CreateBlogData, UpdateBlogData,
};
use crate::modules::blog::application::use_cases::{
    create_blog::{CreateBlogError, CreateBlogUseCase},
    delete_blog::{DeleteBlogError, DeleteBlogUseCase},
    get_blog::{GetBlogError, GetBlogUseCase},
    list_blogs::{ListBlogsError, ListBlogsUseCase},
    update_blog::{UpdateBlogError, UpdateBlogUseCase},
};
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceListFilter;
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, ExperienceRecord, UpdateExperienceData,
};
use crate::modules::experience::application::use_cases::{
    create_experience::{CreateExperienceError, CreateExperienceUseCase},
    delete_experience::{DeleteExperienceError, DeleteExperienceUseCase},
    list_experience::{ListExperienceError, ListExperienceUseCase},
    update_experience::{UpdateExperienceError, UpdateExperienceUseCase},
};
use crate::modules::page::application::ports::outgoing::page_store::{PageRecord, UpdatePageData};
use crate::modules::page::application::use_cases::{
    get_page::{GetPageError, GetPageUseCase},
    update_page::{UpdatePageError, UpdatePageUseCase},
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectListFilter;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRecord, UpdateProjectData,
};
use crate::modules::project::application::use_cases::{
    create_project::{CreateProjectError, CreateProjectUseCase},
    delete_project::{DeleteProjectError, DeleteProjectUseCase},
    get_project::{GetProjectError, GetProjectUseCase},
    list_projects::{ListProjectsError, ListProjectsUseCase},
    update_project::{UpdateProjectError, UpdateProjectUseCase},
};
use crate::modules::settings::application::domain::global_settings::{
    GlobalSettings, SettingsPatch,
};
use crate::modules::settings::application::use_cases::{
    get_settings::GetSettingsUseCase,
    update_settings::{UpdateSettingsError, UpdateSettingsUseCase},
};
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    CreateSkillData, SkillRecord, UpdateSkillData,
};
use crate::modules::skill::application::use_cases::{
    create_skill::{CreateSkillError, CreateSkillUseCase},
    delete_skill::{DeleteSkillError, DeleteSkillUseCase},
    list_skills::{ListSkillsError, ListSkillsUseCase},
    update_skill::{UpdateSkillError, UpdateSkillUseCase},
};

const UNUSED: &str = "not used in this test";

// ----------------------------------------------------------------------
// Auth
// ----------------------------------------------------------------------

pub struct StubLoginUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUseCase {
    async fn execute(&self, _email: &str, _password: &str) -> Result<LoginOutcome, LoginError> {
        Err(LoginError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubFetchCurrentUserUseCase;

#[async_trait]
impl FetchCurrentUserUseCase for StubFetchCurrentUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserSummary, FetchCurrentUserError> {
        Err(FetchCurrentUserError::RepositoryError(UNUSED.to_string()))
    }
}

// ----------------------------------------------------------------------
// Settings
// ----------------------------------------------------------------------

pub struct StubGetSettingsUseCase;

#[async_trait]
impl GetSettingsUseCase for StubGetSettingsUseCase {
    async fn execute(&self) -> GlobalSettings {
        GlobalSettings::default()
    }
}

pub struct StubUpdateSettingsUseCase;

#[async_trait]
impl UpdateSettingsUseCase for StubUpdateSettingsUseCase {
    async fn execute(&self, _patch: SettingsPatch) -> Result<GlobalSettings, UpdateSettingsError> {
        Err(UpdateSettingsError::RepositoryError(UNUSED.to_string()))
    }
}

// ----------------------------------------------------------------------
// Pages
// ----------------------------------------------------------------------

pub struct StubGetPageUseCase;

#[async_trait]
impl GetPageUseCase for StubGetPageUseCase {
    async fn execute(&self, _slug: &str, _resolve: bool) -> Result<PageRecord, GetPageError> {
        Err(GetPageError::PageNotFound)
    }
}

pub struct StubUpdatePageUseCase;

#[async_trait]
impl UpdatePageUseCase for StubUpdatePageUseCase {
    async fn execute(
        &self,
        _slug: &str,
        _data: UpdatePageData,
    ) -> Result<PageRecord, UpdatePageError> {
        Err(UpdatePageError::RepositoryError(UNUSED.to_string()))
    }
}

// ----------------------------------------------------------------------
// Blogs
// ----------------------------------------------------------------------

pub struct StubListBlogsUseCase;

#[async_trait]
impl ListBlogsUseCase for StubListBlogsUseCase {
    async fn execute(&self, _filter: BlogListFilter) -> Result<Vec<BlogRecord>, ListBlogsError> {
        Ok(vec![])
    }
}

pub struct StubGetBlogUseCase;

#[async_trait]
impl GetBlogUseCase for StubGetBlogUseCase {
    async fn execute(&self, _slug: &str) -> Result<BlogRecord, GetBlogError> {
        Err(GetBlogError::BlogNotFound)
    }
}

pub struct StubCreateBlogUseCase;

#[async_trait]
impl CreateBlogUseCase for StubCreateBlogUseCase {
    async fn execute(&self, _data: CreateBlogData) -> Result<BlogRecord, CreateBlogError> {
        Err(CreateBlogError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateBlogUseCase;

#[async_trait]
impl UpdateBlogUseCase for StubUpdateBlogUseCase {
    async fn execute(
        &self,
        _blog_id: Uuid,
        _data: UpdateBlogData,
    ) -> Result<BlogRecord, UpdateBlogError> {
        Err(UpdateBlogError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubDeleteBlogUseCase;

#[async_trait]
impl DeleteBlogUseCase for StubDeleteBlogUseCase {
    async fn execute(&self, _blog_id: Uuid) -> Result<(), DeleteBlogError> {
        Err(DeleteBlogError::RepositoryError(UNUSED.to_string()))
    }
}

// ----------------------------------------------------------------------
// Projects
// ----------------------------------------------------------------------

pub struct StubListProjectsUseCase;

#[async_trait]
impl ListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(
        &self,
        _filter: ProjectListFilter,
    ) -> Result<Vec<ProjectRecord>, ListProjectsError> {
        Ok(vec![])
    }
}

pub struct StubGetProjectUseCase;

#[async_trait]
impl GetProjectUseCase for StubGetProjectUseCase {
    async fn execute(&self, _slug: &str) -> Result<ProjectRecord, GetProjectError> {
        Err(GetProjectError::ProjectNotFound)
    }
}

pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _data: CreateProjectData,
    ) -> Result<ProjectRecord, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _data: UpdateProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        Err(UpdateProjectError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::RepositoryError(UNUSED.to_string()))
    }
}

// ----------------------------------------------------------------------
// Experience
// ----------------------------------------------------------------------

pub struct StubListExperienceUseCase;

#[async_trait]
impl ListExperienceUseCase for StubListExperienceUseCase {
    async fn execute(
        &self,
        _filter: ExperienceListFilter,
    ) -> Result<Vec<ExperienceRecord>, ListExperienceError> {
        Ok(vec![])
    }
}

pub struct StubCreateExperienceUseCase;

#[async_trait]
impl CreateExperienceUseCase for StubCreateExperienceUseCase {
    async fn execute(
        &self,
        _data: CreateExperienceData,
    ) -> Result<ExperienceRecord, CreateExperienceError> {
        Err(CreateExperienceError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateExperienceUseCase;

#[async_trait]
impl UpdateExperienceUseCase for StubUpdateExperienceUseCase {
    async fn execute(
        &self,
        _experience_id: Uuid,
        _data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, UpdateExperienceError> {
        Err(UpdateExperienceError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubDeleteExperienceUseCase;

#[async_trait]
impl DeleteExperienceUseCase for StubDeleteExperienceUseCase {
    async fn execute(&self, _experience_id: Uuid) -> Result<(), DeleteExperienceError> {
        Err(DeleteExperienceError::RepositoryError(UNUSED.to_string()))
    }
}

// ----------------------------------------------------------------------
// Skills
// ----------------------------------------------------------------------

pub struct StubListSkillsUseCase;

#[async_trait]
impl ListSkillsUseCase for StubListSkillsUseCase {
    async fn execute(&self) -> Result<Vec<SkillRecord>, ListSkillsError> {
        Ok(vec![])
    }
}

pub struct StubCreateSkillUseCase;

#[async_trait]
impl CreateSkillUseCase for StubCreateSkillUseCase {
    async fn execute(&self, _data: CreateSkillData) -> Result<SkillRecord, CreateSkillError> {
        Err(CreateSkillError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateSkillUseCase;

#[async_trait]
impl UpdateSkillUseCase for StubUpdateSkillUseCase {
    async fn execute(
        &self,
        _skill_id: Uuid,
        _data: UpdateSkillData,
    ) -> Result<SkillRecord, UpdateSkillError> {
        Err(UpdateSkillError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubDeleteSkillUseCase;

#[async_trait]
impl DeleteSkillUseCase for StubDeleteSkillUseCase {
    async fn execute(&self, _skill_id: Uuid) -> Result<(), DeleteSkillError> {
        Err(DeleteSkillError::RepositoryError(UNUSED.to_string()))
    }
}
