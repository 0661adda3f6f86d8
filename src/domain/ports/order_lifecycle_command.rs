//! Driving port for admin-initiated order status changes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::Error;
use crate::domain::order::{AdminId, OrderId, OrderStatus};

/// Request to change an order's lifecycle status.
///
/// `new_status` arrives as the raw form value; the lifecycle manager parses
/// it and rejects anything outside the five known statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub order_id: OrderId,
    pub new_status: String,
    pub acting_admin: AdminId,
    pub notify_customer: bool,
}

/// Outcome of a successful status change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusResponse {
    pub order_id: OrderId,
    pub status: OrderStatus,
    /// Whether a notification row was recorded for the owner. False when
    /// notification was not requested, the owner is unresolvable, or the
    /// best-effort dispatch failed.
    pub customer_notified: bool,
}

/// Driving port for order lifecycle mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderLifecycleCommand: Send + Sync {
    /// Validate and apply a status transition, append the audit entry, and
    /// dispatch a best-effort customer notification when requested.
    ///
    /// Terminal failures: `OrderNotFound`, `InvalidStatus`,
    /// `InvalidTransition` (forward-only policy), `PersistenceError`.
    /// Notification failures are never surfaced.
    async fn update_status(
        &self,
        request: UpdateOrderStatusRequest,
    ) -> Result<UpdateOrderStatusResponse, Error>;
}

/// Fixture command for callers wired up before persistence exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOrderLifecycleCommand;

#[async_trait]
impl OrderLifecycleCommand for FixtureOrderLifecycleCommand {
    async fn update_status(
        &self,
        request: UpdateOrderStatusRequest,
    ) -> Result<UpdateOrderStatusResponse, Error> {
        let status: OrderStatus = request
            .new_status
            .parse()
            .map_err(|err| Error::invalid_status(format!("{err}")))?;

        Ok(UpdateOrderStatusResponse {
            order_id: request.order_id,
            status,
            customer_notified: false,
        })
    }
}
