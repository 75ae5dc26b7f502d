use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::skill::application::ports::outgoing::skill_query::{
    SkillQuery, SkillQueryError,
};
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    CreateSkillData, SkillRecord, SkillRepository, SkillRepositoryError, UpdateSkillData,
};
use crate::shared::patch::PatchField;

// One adapter implements both sides; the skill table is small enough that
// splitting command and query stores buys nothing.

#[derive(Clone)]
pub struct SkillStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillStorePostgres {
    async fn list(&self) -> Result<Vec<SkillRecord>, SkillQueryError> {
        let skills = Entity::find()
            .order_by_asc(Column::Category)
            .order_by_asc(Column::SortOrder)
            .all(&*self.db)
            .await
            .map_err(|e| SkillQueryError::DatabaseError(e.to_string()))?;

        Ok(skills.into_iter().map(model_to_record).collect())
    }
}

#[async_trait]
impl SkillRepository for SkillStorePostgres {
    async fn create_skill(
        &self,
        data: CreateSkillData,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name.trim().to_string()),
            category: Set(data.category.trim().to_string()),
            icon: Set(data.icon),
            sort_order: Set(data.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(result))
    }

    async fn update_skill(
        &self,
        skill_id: Uuid,
        data: UpdateSkillData,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = data.name {
            model.name = Set(name.trim().to_string());
        }

        if let Some(category) = data.category {
            model.category = Set(category.trim().to_string());
        }

        match data.icon {
            PatchField::Unset => {}
            PatchField::Null => model.icon = Set(None),
            PatchField::Value(v) => model.icon = Set(Some(v)),
        }

        if let Some(sort_order) = data.sort_order {
            model.sort_order = Set(sort_order);
        }

        let has_changes = model.name.is_set()
            || model.category.is_set()
            || model.icon.is_set()
            || model.sort_order.is_set();

        if !has_changes {
            let result = Entity::find_by_id(skill_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(SkillRepositoryError::NotFound)?;

            return Ok(model_to_record(result));
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(skill_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(SkillRepositoryError::NotFound)?;

        Ok(model_to_record(result))
    }

    async fn delete_skill(&self, skill_id: Uuid) -> Result<(), SkillRepositoryError> {
        let skill = Entity::find_by_id(skill_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        skill.delete(&*self.db).await.map_err(map_db_err)?;

        Ok(())
    }
}

fn model_to_record(model: skills::Model) -> SkillRecord {
    SkillRecord {
        id: model.id,
        name: model.name,
        category: model.category,
        icon: model.icon,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn skill_model(name: &str, category: &str, sort_order: i32) -> skills::Model {
        let now = Utc::now().fixed_offset();
        skills::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            icon: None,
            sort_order,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                skill_model("PostgreSQL", "Database", 0),
                skill_model("React", "Frontend", 0),
                skill_model("Next.js", "Frontend", 1),
            ]])
            .into_connection();

        let store = SkillStorePostgres::new(Arc::new(db));
        let skills = store.list().await.unwrap();

        assert_eq!(skills.len(), 3);
        assert_eq!(skills[0].category, "Database");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<skills::Model>::new()])
            .into_connection();

        let store = SkillStorePostgres::new(Arc::new(db));
        let result = store.delete_skill(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), SkillRepositoryError::NotFound));
    }
}
