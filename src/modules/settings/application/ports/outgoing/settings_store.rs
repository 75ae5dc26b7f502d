// src/modules/settings/application/ports/outgoing/settings_store.rs

use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// One persisted key/value row. `value` is JSON text, decoded against a
/// per-field default by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRow {
    pub key: String,
    pub value: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SettingsQuery: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<SettingRow>, SettingsStoreError>;
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Insert-or-replace the value stored under `key`.
    async fn upsert(&self, key: &str, value: String) -> Result<(), SettingsStoreError>;
}
