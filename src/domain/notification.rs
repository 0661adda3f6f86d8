//! Customer notifications and status message templates.
//!
//! The source system switched on the raw status string to pick message
//! copy; here the dispatch is an enum-keyed template selection with an
//! explicit generic fallback, so new statuses cannot drift past the copy
//! table silently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::{CustomerId, OrderId, OrderStatus};

/// Identifier assigned to a notification by the datastore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(i64);

impl NotificationId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// Rendered title and body for one status notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub title: String,
    pub body: String,
}

/// Render the message for an order reaching `status`.
///
/// `Preparing`, `Ready`, and `Completed` carry bespoke copy; every other
/// status (including `pending` and `cancelled`) falls back to the generic
/// update template.
pub fn message_for(order_id: OrderId, status: OrderStatus) -> NotificationMessage {
    match status {
        OrderStatus::Preparing => NotificationMessage {
            title: format!("Order {order_id} is Being Prepared"),
            body: format!("Good news! The kitchen has started preparing your order {order_id}."),
        },
        OrderStatus::Ready => NotificationMessage {
            title: format!("Order {order_id} is Ready!"),
            body: format!(
                "Your order {order_id} is ready for pickup. Please collect it from the counter."
            ),
        },
        OrderStatus::Completed => NotificationMessage {
            title: format!("Order {order_id} Completed"),
            body: format!("Your order {order_id} has been completed. Enjoy your meal!"),
        },
        other => NotificationMessage {
            title: format!("Order {order_id} Update"),
            body: format!("Your order {order_id} status updated to {other}."),
        },
    }
}

/// Data for a notification that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub customer_id: CustomerId,
    pub order_id: OrderId,
    pub title: String,
    pub message: String,
}

/// A customer-visible message generated as a side effect of a status
/// transition. The read flag is only ever flipped by the customer-facing
/// app; this crate never deletes notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub customer_id: CustomerId,
    pub order_id: OrderId,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn preparing_uses_bespoke_copy() {
        let message = message_for(OrderId::new(42), OrderStatus::Preparing);
        assert_eq!(message.title, "Order #42 is Being Prepared");
    }

    #[rstest]
    fn ready_uses_bespoke_copy() {
        let message = message_for(OrderId::new(7), OrderStatus::Ready);
        assert_eq!(message.title, "Order #7 is Ready!");
        assert!(message.body.contains("ready for pickup"));
    }

    #[rstest]
    fn completed_uses_bespoke_copy() {
        let message = message_for(OrderId::new(3), OrderStatus::Completed);
        assert_eq!(message.title, "Order #3 Completed");
    }

    #[rstest]
    #[case(OrderStatus::Pending, "pending")]
    #[case(OrderStatus::Cancelled, "cancelled")]
    fn other_statuses_fall_back_to_generic_template(
        #[case] status: OrderStatus,
        #[case] wire: &str,
    ) {
        let message = message_for(OrderId::new(9), status);
        assert_eq!(message.title, "Order #9 Update");
        assert!(message.body.contains(&format!("status updated to {wire}")));
    }
}
