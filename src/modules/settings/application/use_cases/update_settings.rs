use async_trait::async_trait;
use std::fmt;

use crate::modules::settings::application::domain::global_settings::{
    GlobalSettings, SettingsPatch,
};
use crate::modules::settings::application::ports::outgoing::settings_store::{
    SettingsQuery, SettingsRepository, SettingsStoreError,
};

#[derive(Debug, Clone)]
pub enum UpdateSettingsError {
    RepositoryError(String),
}

impl fmt::Display for UpdateSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateSettingsError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

/// Upsert the provided fields, leave the rest untouched, then return the
/// freshly re-resolved object.
#[async_trait]
pub trait UpdateSettingsUseCase: Send + Sync {
    async fn execute(&self, patch: SettingsPatch) -> Result<GlobalSettings, UpdateSettingsError>;
}

pub struct UpdateSettingsService<R, Q>
where
    R: SettingsRepository,
    Q: SettingsQuery,
{
    settings_repository: R,
    settings_query: Q,
}

impl<R, Q> UpdateSettingsService<R, Q>
where
    R: SettingsRepository,
    Q: SettingsQuery,
{
    pub fn new(settings_repository: R, settings_query: Q) -> Self {
        Self {
            settings_repository,
            settings_query,
        }
    }
}

#[async_trait]
impl<R, Q> UpdateSettingsUseCase for UpdateSettingsService<R, Q>
where
    R: SettingsRepository + Send + Sync,
    Q: SettingsQuery + Send + Sync,
{
    async fn execute(&self, patch: SettingsPatch) -> Result<GlobalSettings, UpdateSettingsError> {
        let entries = patch
            .entries()
            .map_err(|e| UpdateSettingsError::RepositoryError(e.to_string()))?;

        for (key, value) in entries {
            self.settings_repository
                .upsert(key, value)
                .await
                .map_err(|e| match e {
                    SettingsStoreError::DatabaseError(msg) => {
                        UpdateSettingsError::RepositoryError(msg)
                    }
                    SettingsStoreError::SerializationError(msg) => {
                        UpdateSettingsError::RepositoryError(msg)
                    }
                })?;
        }

        let rows = self
            .settings_query
            .fetch_all()
            .await
            .map_err(|e| UpdateSettingsError::RepositoryError(e.to_string()))?;

        Ok(GlobalSettings::resolve(&rows))
    }
}
