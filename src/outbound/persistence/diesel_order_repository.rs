//! PostgreSQL-backed `OrderRepository` implementation using Diesel ORM.
//!
//! Loads orders with their item snapshots, resolves owners through a join
//! against live customer accounts, and applies status changes together
//! with the audit append in one transaction.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::audit::NewStatusAuditEntry;
use crate::domain::order::{CustomerId, Order, OrderDraft, OrderId, OrderItem, OrderStatus};
use crate::domain::ports::{OrderRepository, OrderRepositoryError};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewAuditEntryRow, OrderItemRow, OrderRow};
use super::pool::{DbPool, PoolError};
use super::schema::{order_items, order_status_history, orders, users};

/// Diesel-backed implementation of the order repository port.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> OrderRepositoryError {
    map_basic_pool_error(error, OrderRepositoryError::connection)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> OrderRepositoryError {
    map_basic_diesel_error(
        error,
        OrderRepositoryError::query,
        OrderRepositoryError::connection,
    )
}

fn row_to_item(row: OrderItemRow) -> Result<OrderItem, OrderRepositoryError> {
    let quantity = u32::try_from(row.quantity)
        .map_err(|_| OrderRepositoryError::query("order item quantity out of range"))?;
    OrderItem::new(
        row.item_name,
        row.unit_price,
        row.category_name,
        row.image_path,
        quantity,
    )
    .map_err(|err| OrderRepositoryError::query(err.to_string()))
}

/// Convert database rows into a validated domain order.
fn rows_to_order(row: OrderRow, item_rows: Vec<OrderItemRow>) -> Result<Order, OrderRepositoryError> {
    let status: OrderStatus = row
        .status
        .parse()
        .map_err(|err| OrderRepositoryError::query(format!("decode status: {err}")))?;

    let items = item_rows
        .into_iter()
        .map(row_to_item)
        .collect::<Result<Vec<_>, _>>()?;

    Order::new(OrderDraft {
        id: OrderId::new(row.id),
        customer_id: row.customer_id.map(CustomerId::from_uuid),
        status,
        total: row.total,
        order_date: row.order_date,
        pickup_location: row.pickup_location,
        special_instructions: row.special_instructions,
        items,
    })
    .map_err(|err| OrderRepositoryError::query(err.to_string()))
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = orders::table
            .filter(orders::id.eq(order_id.value()))
            .select(OrderRow::as_select())
            .first::<OrderRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let item_rows: Vec<OrderItemRow> = order_items::table
            .filter(order_items::order_id.eq(order_id.value()))
            .order(order_items::id.asc())
            .select(OrderItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_order(row, item_rows).map(Some)
    }

    async fn find_owner(
        &self,
        order_id: OrderId,
    ) -> Result<Option<CustomerId>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // The inner join drops orders whose customer reference is null or
        // whose account row has been deleted.
        let owner = orders::table
            .inner_join(users::table)
            .filter(orders::id.eq(order_id.value()))
            .select(users::id)
            .first::<Uuid>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(owner.map(CustomerId::from_uuid))
    }

    async fn apply_status_change(
        &self,
        order_id: OrderId,
        new_status: OrderStatus,
        audit: NewStatusAuditEntry,
    ) -> Result<bool, OrderRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Status write and audit append commit or fail together so a crash
        // between them cannot leave a changed order without its trail.
        conn.transaction(|conn| {
            async move {
                let updated = diesel::update(orders::table.filter(orders::id.eq(order_id.value())))
                    .set(orders::status.eq(new_status.as_str()))
                    .execute(conn)
                    .await?;

                if updated == 0 {
                    return Ok(false);
                }

                let audit_row = NewAuditEntryRow {
                    order_id: audit.order_id.value(),
                    status: audit.status.as_str(),
                    admin_id: *audit.acting_admin.as_uuid(),
                    note: &audit.note,
                };

                diesel::insert_into(order_status_history::table)
                    .values(&audit_row)
                    .execute(conn)
                    .await?;

                Ok(true)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for row conversion and error mapping.

    use chrono::Utc;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;

    use super::*;

    #[fixture]
    fn valid_row() -> OrderRow {
        OrderRow {
            id: 42,
            customer_id: Some(Uuid::new_v4()),
            status: "preparing".to_owned(),
            total: Decimal::new(1250, 2),
            order_date: Utc::now(),
            pickup_location: Some("North Hall counter 2".to_owned()),
            special_instructions: None,
        }
    }

    fn item_row() -> OrderItemRow {
        OrderItemRow {
            id: 1,
            order_id: 42,
            item_name: "Laksa".to_owned(),
            unit_price: Decimal::new(650, 2),
            category_name: "Mains".to_owned(),
            image_path: None,
            quantity: 2,
        }
    }

    #[rstest]
    fn valid_rows_convert_to_a_domain_order(valid_row: OrderRow) {
        let order = rows_to_order(valid_row, vec![item_row()]).expect("valid rows");

        assert_eq!(order.id(), OrderId::new(42));
        assert_eq!(order.status(), OrderStatus::Preparing);
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].quantity(), 2);
    }

    #[rstest]
    fn unknown_status_strings_are_rejected(mut valid_row: OrderRow) {
        valid_row.status = "shipped".to_owned();

        let error = rows_to_order(valid_row, Vec::new()).expect_err("unknown status");
        assert!(matches!(error, OrderRepositoryError::Query { .. }));
        assert!(error.to_string().contains("decode status"));
    }

    #[rstest]
    fn negative_item_quantities_are_rejected(valid_row: OrderRow) {
        let mut item = item_row();
        item.quantity = -1;

        let error = rows_to_order(valid_row, vec![item]).expect_err("negative quantity");
        assert!(matches!(error, OrderRepositoryError::Query { .. }));
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let mapped = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(mapped, OrderRepositoryError::Connection { .. }));
        assert!(mapped.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(mapped, OrderRepositoryError::Query { .. }));
    }
}
