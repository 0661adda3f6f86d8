//! PostgreSQL-backed `SettingsRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{Setting, SettingsRepository, SettingsRepositoryError};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewSettingRow, SettingRow};
use super::pool::{DbPool, PoolError};
use super::schema::settings;

/// Diesel-backed implementation of the settings store port.
#[derive(Clone)]
pub struct DieselSettingsRepository {
    pool: DbPool,
}

impl DieselSettingsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SettingsRepositoryError {
    map_basic_pool_error(error, SettingsRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> SettingsRepositoryError {
    map_basic_diesel_error(
        error,
        SettingsRepositoryError::query,
        SettingsRepositoryError::connection,
    )
}

#[async_trait]
impl SettingsRepository for DieselSettingsRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, SettingsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let value = settings::table
            .filter(settings::key.eq(key))
            .select(settings::value)
            .first::<String>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SettingsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(settings::table)
            .values(&NewSettingRow { key, value })
            .on_conflict(settings::key)
            .do_update()
            .set((settings::value.eq(value), settings::updated_at.eq(Utc::now())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Setting>, SettingsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<SettingRow> = settings::table
            .order(settings::key.asc())
            .select(SettingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|row| Setting {
                key: row.key,
                value: row.value,
            })
            .collect())
    }
}
