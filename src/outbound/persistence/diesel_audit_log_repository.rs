//! PostgreSQL-backed `AuditLogRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::audit::{AuditEntryId, NewStatusAuditEntry, StatusAuditEntry};
use crate::domain::order::{AdminId, OrderId, OrderStatus};
use crate::domain::ports::{AuditLogRepository, AuditLogRepositoryError};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{AuditEntryRow, NewAuditEntryRow};
use super::pool::{DbPool, PoolError};
use super::schema::order_status_history;

/// Diesel-backed implementation of the audit log port.
#[derive(Clone)]
pub struct DieselAuditLogRepository {
    pool: DbPool,
}

impl DieselAuditLogRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AuditLogRepositoryError {
    map_basic_pool_error(error, AuditLogRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AuditLogRepositoryError {
    map_basic_diesel_error(
        error,
        AuditLogRepositoryError::query,
        AuditLogRepositoryError::connection,
    )
}

/// Convert a database row into a domain audit entry.
fn row_to_entry(row: AuditEntryRow) -> Result<StatusAuditEntry, AuditLogRepositoryError> {
    let status: OrderStatus = row
        .status
        .parse()
        .map_err(|err| AuditLogRepositoryError::query(format!("decode status: {err}")))?;

    Ok(StatusAuditEntry {
        id: AuditEntryId::new(row.id),
        order_id: OrderId::new(row.order_id),
        status,
        acting_admin: AdminId::from_uuid(row.admin_id),
        note: row.note,
        created_at: row.created_at,
    })
}

#[async_trait]
impl AuditLogRepository for DieselAuditLogRepository {
    async fn append(
        &self,
        entry: NewStatusAuditEntry,
    ) -> Result<AuditEntryId, AuditLogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewAuditEntryRow {
            order_id: entry.order_id.value(),
            status: entry.status.as_str(),
            admin_id: *entry.acting_admin.as_uuid(),
            note: &entry.note,
        };

        let id = diesel::insert_into(order_status_history::table)
            .values(&row)
            .returning(order_status_history::id)
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(AuditEntryId::new(id))
    }

    async fn list_by_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<StatusAuditEntry>, AuditLogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AuditEntryRow> = order_status_history::table
            .filter(order_status_history::order_id.eq(order_id.value()))
            .order((
                order_status_history::created_at.desc(),
                order_status_history::id.desc(),
            ))
            .select(AuditEntryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_entry).collect()
    }
}
