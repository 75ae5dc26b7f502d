use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::experience::application::domain::entities::{ExperienceType, Period};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
    UpdateExperienceData,
};
use crate::shared::codec;
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn create_experience(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            role: Set(data.role.trim().to_string()),
            organization: Set(data.organization.trim().to_string()),
            location: Set(data.location),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(to_json_text(&data.description)?),
            kind: Set(data.kind.as_str().to_string()),
            sort_order: Set(data.sort_order),
            visible: Set(data.visible),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(result))
    }

    async fn update_experience(
        &self,
        experience_id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(role) = data.role {
            model.role = Set(role.trim().to_string());
        }

        if let Some(organization) = data.organization {
            model.organization = Set(organization.trim().to_string());
        }

        match data.location {
            PatchField::Unset => {}
            PatchField::Null => model.location = Set(None),
            PatchField::Value(v) => model.location = Set(Some(v)),
        }

        if let Some(start_date) = data.start_date {
            model.start_date = Set(start_date);
        }

        // Null returns the role to "Present".
        match data.end_date {
            PatchField::Unset => {}
            PatchField::Null => model.end_date = Set(None),
            PatchField::Value(v) => model.end_date = Set(Some(v)),
        }

        if let Some(description) = data.description {
            model.description = Set(to_json_text(&description)?);
        }

        if let Some(kind) = data.kind {
            model.kind = Set(kind.as_str().to_string());
        }

        if let Some(sort_order) = data.sort_order {
            model.sort_order = Set(sort_order);
        }

        if let Some(visible) = data.visible {
            model.visible = Set(visible);
        }

        let has_changes = model.role.is_set()
            || model.organization.is_set()
            || model.location.is_set()
            || model.start_date.is_set()
            || model.end_date.is_set()
            || model.description.is_set()
            || model.kind.is_set()
            || model.sort_order.is_set()
            || model.visible.is_set();

        if !has_changes {
            let result = Entity::find_by_id(experience_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ExperienceRepositoryError::NotFound)?;

            return Ok(model_to_record(result));
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(experience_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ExperienceRepositoryError::NotFound)?;

        Ok(model_to_record(result))
    }

    async fn delete_experience(
        &self,
        experience_id: Uuid,
    ) -> Result<(), ExperienceRepositoryError> {
        let experience = Entity::find_by_id(experience_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ExperienceRepositoryError::NotFound)?;

        experience.delete(&*self.db).await.map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn model_to_record(model: experiences::Model) -> ExperienceRecord {
    let period = Period::new(model.start_date, model.end_date).to_string();

    ExperienceRecord {
        id: model.id,
        role: model.role,
        organization: model.organization,
        location: model.location,
        start_date: model.start_date,
        end_date: model.end_date,
        period,
        description: codec::decode_or(Some(&model.description), vec![]),
        kind: ExperienceType::from_str_or_default(&model.kind),
        sort_order: model.sort_order,
        visible: model.visible,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn to_json_text<T: serde::Serialize>(data: &T) -> Result<String, ExperienceRepositoryError> {
    codec::encode(data).map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mock_experience_model(end_date: Option<NaiveDate>) -> experiences::Model {
        let now = Utc::now().fixed_offset();
        experiences::Model {
            id: Uuid::new_v4(),
            role: "Software Engineer".to_string(),
            organization: "Example Company".to_string(),
            location: Some("Remote".to_string()),
            start_date: date(2023, 1, 1),
            end_date,
            description: r#"["Built the platform"]"#.to_string(),
            kind: "Work".to_string(),
            sort_order: 0,
            visible: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_experience_formats_open_ended_period() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_experience_model(None)]])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .create_experience(CreateExperienceData {
                role: "Software Engineer".to_string(),
                organization: "Example Company".to_string(),
                location: Some("Remote".to_string()),
                start_date: date(2023, 1, 1),
                end_date: None,
                description: vec!["Built the platform".to_string()],
                kind: ExperienceType::Work,
                sort_order: 0,
                visible: true,
            })
            .await
            .unwrap();

        assert_eq!(record.period, "Jan 2023 - Present");
        assert_eq!(record.description, vec!["Built the platform"]);
    }

    #[tokio::test]
    async fn test_update_clears_end_date() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_experience_model(None)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .update_experience(
                Uuid::new_v4(),
                UpdateExperienceData {
                    end_date: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(record.end_date.is_none());
        assert!(record.period.ends_with("Present"));
    }

    #[tokio::test]
    async fn test_unknown_kind_degrades_to_work() {
        let mut model = mock_experience_model(Some(date(2024, 6, 30)));
        model.kind = "Sabbatical".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .update_experience(Uuid::new_v4(), UpdateExperienceData::default())
            .await
            .unwrap();

        assert_eq!(record.kind, ExperienceType::Work);
        assert_eq!(record.period, "Jan 2023 - Jun 2024");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<experiences::Model>::new()])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete_experience(Uuid::new_v4()).await;

        assert!(matches!(
            result.unwrap_err(),
            ExperienceRepositoryError::NotFound
        ));
    }
}
