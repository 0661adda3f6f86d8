//! Seam between the lifecycle manager and notification delivery.
//!
//! The lifecycle service only needs "try to tell the customer"; the
//! production implementation lives in
//! [`crate::domain::NotificationService`].

use async_trait::async_trait;

use crate::domain::order::{OrderId, OrderStatus};

use super::define_port_error;

define_port_error! {
    /// Errors raised while composing or persisting a notification.
    pub enum NotificationDispatchError {
        /// The notification could not be stored.
        Store { message: String } =>
            "notification dispatch failed: {message}",
    }
}

/// Port for dispatching a status notification to the order's owner.
///
/// Returns `Ok(true)` when a notification was recorded, `Ok(false)` when
/// the order has no resolvable owner. Callers must treat every failure as
/// best-effort: a dispatch error never unwinds the status update.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Compose and persist the status message for the order's owner.
    async fn send(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<bool, NotificationDispatchError>;
}

/// Fixture dispatcher for tests that do not care about notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNotificationDispatcher;

#[async_trait]
impl NotificationDispatcher for FixtureNotificationDispatcher {
    async fn send(
        &self,
        _order_id: OrderId,
        _status: OrderStatus,
    ) -> Result<bool, NotificationDispatchError> {
        Ok(false)
    }
}
