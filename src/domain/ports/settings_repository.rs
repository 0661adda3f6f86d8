//! Port for the key/value back-office settings store.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by settings store adapters.
    pub enum SettingsRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "settings store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "settings store query failed: {message}",
    }
}

/// One persisted setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

/// Port for reading and writing settings. `set` upserts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, SettingsRepositoryError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), SettingsRepositoryError>;

    async fn list(&self) -> Result<Vec<Setting>, SettingsRepositoryError>;
}
