use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::modules::experience::adapter::outgoing::experience_repository_postgres::model_to_record;
use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{Column, Entity};
use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceListFilter, ExperienceQuery, ExperienceQueryError,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRecord;

#[derive(Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list(
        &self,
        filter: ExperienceListFilter,
    ) -> Result<Vec<ExperienceRecord>, ExperienceQueryError> {
        let mut query = Entity::find().order_by_asc(Column::SortOrder);

        if filter.visible_only {
            query = query.filter(Column::Visible.eq(true));
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let experiences = query.all(&*self.db).await.map_err(map_db_err)?;

        Ok(experiences.into_iter().map(model_to_record).collect())
    }
}

fn map_db_err(e: DbErr) -> ExperienceQueryError {
    ExperienceQueryError::DatabaseError(e.to_string())
}
