//! PostgreSQL-backed `ReportingQuery` implementation using Diesel ORM.
//!
//! Loads the status/total pairs for the window and folds them in memory;
//! reporting windows are small enough that pushing the aggregate into SQL
//! is not worth the query complexity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use rust_decimal::Decimal;

use crate::domain::order::OrderStatus;
use crate::domain::ports::{ReportingQuery, ReportingQueryError};
use crate::domain::reporting::SalesSummary;

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::{DbPool, PoolError};
use super::schema::orders;

/// Diesel-backed implementation of the reporting port.
#[derive(Clone)]
pub struct DieselReportingQuery {
    pool: DbPool,
}

impl DieselReportingQuery {
    /// Create a new reporting query with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ReportingQueryError {
    map_basic_pool_error(error, ReportingQueryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ReportingQueryError {
    map_basic_diesel_error(
        error,
        ReportingQueryError::query,
        ReportingQueryError::connection,
    )
}

/// Fold raw status/total pairs into a summary.
fn fold_summary(rows: Vec<(String, Decimal)>) -> Result<SalesSummary, ReportingQueryError> {
    let mut summary = SalesSummary::default();
    for (status, total) in rows {
        let status: OrderStatus = status
            .parse()
            .map_err(|err| ReportingQueryError::query(format!("decode status: {err}")))?;
        summary.record(status, total);
    }
    Ok(summary)
}

#[async_trait]
impl ReportingQuery for DieselReportingQuery {
    async fn sales_summary(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<SalesSummary, ReportingQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(String, Decimal)> = orders::table
            .filter(orders::order_date.ge(from))
            .filter(orders::order_date.lt(to))
            .select((orders::status, orders::total))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        fold_summary(rows)
    }
}
