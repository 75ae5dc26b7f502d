use async_trait::async_trait;
use tracing::warn;

use crate::modules::settings::application::domain::global_settings::GlobalSettings;
use crate::modules::settings::application::ports::outgoing::settings_store::SettingsQuery;

/// Read-through resolver: every call re-reads the store, so each request
/// sees the latest write without cache invalidation.
///
/// This use case is total. If the store is unreachable the hardcoded
/// defaults come back instead of an error; page rendering must never fail
/// solely because settings are unavailable.
#[async_trait]
pub trait GetSettingsUseCase: Send + Sync {
    async fn execute(&self) -> GlobalSettings;
}

pub struct GetSettingsService<Q>
where
    Q: SettingsQuery,
{
    settings_query: Q,
}

impl<Q> GetSettingsService<Q>
where
    Q: SettingsQuery,
{
    pub fn new(settings_query: Q) -> Self {
        Self { settings_query }
    }
}

#[async_trait]
impl<Q> GetSettingsUseCase for GetSettingsService<Q>
where
    Q: SettingsQuery + Send + Sync,
{
    async fn execute(&self) -> GlobalSettings {
        match self.settings_query.fetch_all().await {
            Ok(rows) => GlobalSettings::resolve(&rows),
            Err(e) => {
                warn!("Settings store unavailable, serving defaults: {}", e);
                GlobalSettings::default()
            }
        }
    }
}
