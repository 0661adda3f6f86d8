//! Application configuration loaded via OrthoConfig.
//!
//! Values come from environment variables (prefix `CANTEEN_`), an optional
//! config file, or CLI arguments, in OrthoConfig's usual precedence order.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Database settings for the persistence adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CANTEEN")]
pub struct DatabaseSettings {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Maximum connections held by the pool.
    pub max_connections: Option<u32>,
    /// Minimum idle connections to keep warm.
    pub min_idle: Option<u32>,
}

impl DatabaseSettings {
    /// Build the pool configuration from these settings.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.database_url.clone())
            .with_max_size(self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS))
            .with_min_idle(self.min_idle)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_config_uses_defaults_when_unset() {
        let settings = DatabaseSettings {
            database_url: "postgres://localhost/canteen".to_owned(),
            max_connections: None,
            min_idle: None,
        };

        let config = settings.pool_config();
        assert_eq!(config.database_url(), "postgres://localhost/canteen");
    }
}
