//! Port for persisting customer notifications.

use async_trait::async_trait;

use crate::domain::notification::{NewNotification, Notification, NotificationId};
use crate::domain::order::CustomerId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by notification store adapters.
    pub enum NotificationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "notification store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "notification store query failed: {message}",
    }
}

/// Port for writing and reading notifications.
///
/// Rows are created unread; only the customer-facing app flips the read
/// flag, and nothing here deletes them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persist one notification and return its assigned identifier.
    async fn create(
        &self,
        notification: NewNotification,
    ) -> Result<NotificationId, NotificationRepositoryError>;

    /// Notifications for a customer, newest first.
    async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError>;
}

/// Fixture implementation for tests that do not exercise notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNotificationRepository;

#[async_trait]
impl NotificationRepository for FixtureNotificationRepository {
    async fn create(
        &self,
        _notification: NewNotification,
    ) -> Result<NotificationId, NotificationRepositoryError> {
        Ok(NotificationId::new(0))
    }

    async fn list_for_customer(
        &self,
        _customer_id: CustomerId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::notification::message_for;
    use crate::domain::order::{OrderId, OrderStatus};

    #[rstest]
    #[tokio::test]
    async fn fixture_create_returns_placeholder_id() {
        let repo = FixtureNotificationRepository;
        let message = message_for(OrderId::new(8), OrderStatus::Ready);
        let id = repo
            .create(NewNotification {
                customer_id: CustomerId::random(),
                order_id: OrderId::new(8),
                title: message.title,
                message: message.body,
            })
            .await
            .expect("fixture create succeeds");
        assert_eq!(id, NotificationId::new(0));
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = NotificationRepositoryError::query("insert failed");
        assert!(err.to_string().contains("insert failed"));
    }
}
