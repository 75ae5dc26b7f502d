use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::settings::adapter::outgoing::sea_orm_entity::settings::{
    ActiveModel, Column, Entity,
};
use crate::modules::settings::application::ports::outgoing::settings_store::{
    SettingRow, SettingsQuery, SettingsRepository, SettingsStoreError,
};

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct SettingsStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsQuery for SettingsStorePostgres {
    async fn fetch_all(&self) -> Result<Vec<SettingRow>, SettingsStoreError> {
        let rows = Entity::find().all(&*self.db).await.map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|m| SettingRow {
                key: m.key,
                value: m.value,
            })
            .collect())
    }
}

#[async_trait]
impl SettingsRepository for SettingsStorePostgres {
    async fn upsert(&self, key: &str, value: String) -> Result<(), SettingsStoreError> {
        let now = Utc::now().fixed_offset();

        let existing = Entity::find()
            .filter(Column::Key.eq(key))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.value = Set(value);
                active.updated_at = Set(now);
                active.update(&*self.db).await.map_err(map_db_err)?;
            }
            None => {
                let active = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    key: Set(key.to_string()),
                    value: Set(value),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                active.insert(&*self.db).await.map_err(map_db_err)?;
            }
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> SettingsStoreError {
    SettingsStoreError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
