//! Diesel/PostgreSQL adapters for the domain ports.

mod diesel_audit_log_repository;
mod diesel_customer_repository;
mod diesel_error_mapping;
mod diesel_menu_repository;
mod diesel_notification_repository;
mod diesel_order_repository;
mod diesel_reporting_query;
mod diesel_settings_repository;
mod models;
pub mod pool;
pub mod schema;

use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub use diesel_audit_log_repository::DieselAuditLogRepository;
pub use diesel_customer_repository::DieselCustomerRepository;
pub use diesel_menu_repository::DieselMenuRepository;
pub use diesel_notification_repository::DieselNotificationRepository;
pub use diesel_order_repository::DieselOrderRepository;
pub use diesel_reporting_query::DieselReportingQuery;
pub use diesel_settings_repository::DieselSettingsRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply pending migrations over a blocking connection.
///
/// Intended for startup and operational tooling, before the async pool is
/// built.
pub fn run_migrations(database_url: &str) -> Result<(), PoolError> {
    let mut conn = diesel::PgConnection::establish(database_url)
        .map_err(|err| PoolError::build(err.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|err| PoolError::build(err.to_string()))
}
