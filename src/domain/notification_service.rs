//! Notification dispatcher.
//!
//! Composes status-specific copy for the order's owner and persists it for
//! in-app retrieval. Every failure path is absorbed here: the dispatcher
//! reports `false` rather than erroring, because notification is always
//! best-effort relative to the status update it accompanies.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::notification::{NewNotification, message_for};
use crate::domain::order::{OrderId, OrderStatus};
use crate::domain::ports::{
    NotificationDispatchError, NotificationDispatcher, NotificationRepository, OrderRepository,
};

/// Production dispatcher over the order and notification stores.
#[derive(Clone)]
pub struct NotificationService<O, N> {
    orders: Arc<O>,
    notifications: Arc<N>,
}

impl<O, N> NotificationService<O, N> {
    /// Create a dispatcher with the given stores.
    pub fn new(orders: Arc<O>, notifications: Arc<N>) -> Self {
        Self {
            orders,
            notifications,
        }
    }
}

#[async_trait]
impl<O, N> NotificationDispatcher for NotificationService<O, N>
where
    O: OrderRepository,
    N: NotificationRepository,
{
    async fn send(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<bool, NotificationDispatchError> {
        let owner = match self.orders.find_owner(order_id).await {
            Ok(owner) => owner,
            Err(err) => {
                warn!(
                    order_id = order_id.value(),
                    error = %err,
                    "owner lookup failed; skipping notification"
                );
                return Ok(false);
            }
        };

        // A deleted or never-set owner is a normal outcome, not a failure.
        let Some(customer_id) = owner else {
            debug!(
                order_id = order_id.value(),
                "order has no resolvable owner; nothing to notify"
            );
            return Ok(false);
        };

        let message = message_for(order_id, status);
        let title = message.title.clone();
        let created = self
            .notifications
            .create(NewNotification {
                customer_id,
                order_id,
                title: message.title,
                message: message.body,
            })
            .await;

        match created {
            Ok(notification_id) => {
                info!(
                    order_id = order_id.value(),
                    customer_id = %customer_id,
                    notification_id = notification_id.value(),
                    title = %title,
                    "customer notification recorded"
                );
                Ok(true)
            }
            Err(err) => {
                warn!(
                    order_id = order_id.value(),
                    customer_id = %customer_id,
                    error = %err,
                    "notification write failed"
                );
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
#[path = "notification_service_tests.rs"]
mod tests;
