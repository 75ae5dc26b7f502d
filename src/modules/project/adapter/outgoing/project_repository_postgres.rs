use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError,
    UpdateProjectData,
};
use crate::shared::codec;
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            slug: Set(data.slug.trim().to_lowercase()),
            overview: Set(data.overview),
            problem: Set(data.problem),
            process: Set(data.process),
            solution: Set(data.solution),
            result: Set(data.result),
            tech_stack: Set(to_json_text(&data.tech_stack)?),
            image_gallery: Set(to_json_text(&data.image_gallery)?),
            featured: Set(data.featured),
            sort_order: Set(data.sort_order),
            seo_title: Set(data.seo_title),
            seo_desc: Set(data.seo_desc),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        Ok(model_to_record(result))
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = data.title {
            model.title = Set(title.trim().to_string());
        }

        if let Some(overview) = data.overview {
            model.overview = Set(overview);
        }

        apply_nullable(&mut model.problem, data.problem);
        apply_nullable(&mut model.process, data.process);
        apply_nullable(&mut model.solution, data.solution);
        apply_nullable(&mut model.result, data.result);

        if let Some(tech) = data.tech_stack {
            model.tech_stack = Set(to_json_text(&tech)?);
        }

        if let Some(gallery) = data.image_gallery {
            model.image_gallery = Set(to_json_text(&gallery)?);
        }

        if let Some(featured) = data.featured {
            model.featured = Set(featured);
        }

        if let Some(sort_order) = data.sort_order {
            model.sort_order = Set(sort_order);
        }

        apply_nullable(&mut model.seo_title, data.seo_title);
        apply_nullable(&mut model.seo_desc, data.seo_desc);

        let has_changes = model.title.is_set()
            || model.overview.is_set()
            || model.problem.is_set()
            || model.process.is_set()
            || model.solution.is_set()
            || model.result.is_set()
            || model.tech_stack.is_set()
            || model.image_gallery.is_set()
            || model.featured.is_set()
            || model.sort_order.is_set()
            || model.seo_title.is_set()
            || model.seo_desc.is_set();

        if !has_changes {
            let result = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return Ok(model_to_record(result));
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        Ok(model_to_record(result))
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let project = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        project.delete(&*self.db).await.map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn apply_nullable(
    slot: &mut sea_orm::ActiveValue<Option<String>>,
    patch: PatchField<String>,
) {
    match patch {
        PatchField::Unset => {}
        PatchField::Null => *slot = Set(None),
        PatchField::Value(v) => *slot = Set(Some(v)),
    }
}

pub(crate) fn model_to_record(model: projects::Model) -> ProjectRecord {
    ProjectRecord {
        id: model.id,
        title: model.title,
        slug: model.slug,
        overview: model.overview,
        problem: model.problem,
        process: model.process,
        solution: model.solution,
        result: model.result,
        tech_stack: codec::decode_or(Some(&model.tech_stack), vec![]),
        image_gallery: codec::decode_or(Some(&model.image_gallery), vec![]),
        featured: model.featured,
        sort_order: model.sort_order,
        seo_title: model.seo_title,
        seo_desc: model.seo_desc,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn to_json_text<T: serde::Serialize>(data: &T) -> Result<String, ProjectRepositoryError> {
    codec::encode(data).map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
