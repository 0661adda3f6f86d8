//! PostgreSQL-backed `NotificationRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::notification::{NewNotification, Notification, NotificationId};
use crate::domain::order::{CustomerId, OrderId};
use crate::domain::ports::{NotificationRepository, NotificationRepositoryError};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewNotificationRow, NotificationRow};
use super::pool::{DbPool, PoolError};
use super::schema::notifications;

/// Diesel-backed implementation of the notification store port.
#[derive(Clone)]
pub struct DieselNotificationRepository {
    pool: DbPool,
}

impl DieselNotificationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> NotificationRepositoryError {
    map_basic_pool_error(error, NotificationRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> NotificationRepositoryError {
    map_basic_diesel_error(
        error,
        NotificationRepositoryError::query,
        NotificationRepositoryError::connection,
    )
}

fn row_to_notification(row: NotificationRow) -> Notification {
    Notification {
        id: NotificationId::new(row.id),
        customer_id: CustomerId::from_uuid(row.user_id),
        order_id: OrderId::new(row.order_id),
        title: row.title,
        message: row.message,
        is_read: row.is_read,
        created_at: row.created_at,
    }
}

#[async_trait]
impl NotificationRepository for DieselNotificationRepository {
    async fn create(
        &self,
        notification: NewNotification,
    ) -> Result<NotificationId, NotificationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewNotificationRow {
            user_id: *notification.customer_id.as_uuid(),
            order_id: notification.order_id.value(),
            title: &notification.title,
            message: &notification.message,
        };

        let id = diesel::insert_into(notifications::table)
            .values(&row)
            .returning(notifications::id)
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(NotificationId::new(id))
    }

    async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<NotificationRow> = notifications::table
            .filter(notifications::user_id.eq(customer_id.as_uuid()))
            .order((notifications::created_at.desc(), notifications::id.desc()))
            .select(NotificationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_notification).collect())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for row conversion and error mapping.

    use chrono::Utc;
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    #[rstest]
    fn row_converts_with_read_flag_preserved() {
        let row = NotificationRow {
            id: 7,
            user_id: Uuid::new_v4(),
            order_id: 42,
            title: "Order #42 is Ready!".to_owned(),
            message: "Your order #42 is ready for pickup.".to_owned(),
            is_read: true,
            created_at: Utc::now(),
        };

        let notification = row_to_notification(row);

        assert_eq!(notification.id, NotificationId::new(7));
        assert_eq!(notification.order_id, OrderId::new(42));
        assert!(notification.is_read);
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let mapped = map_pool_error(PoolError::build("bad url"));
        assert!(matches!(
            mapped,
            NotificationRepositoryError::Connection { .. }
        ));
    }
}
