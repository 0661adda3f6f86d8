//! Order lifecycle manager.
//!
//! Validates requested status transitions, applies them together with the
//! audit entry in one repository transaction, and dispatches a best-effort
//! customer notification after commit.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::Error;
use crate::domain::audit::NewStatusAuditEntry;
use crate::domain::order::OrderStatus;
use crate::domain::ports::{
    NotificationDispatcher, OrderLifecycleCommand, OrderRepository, OrderRepositoryError,
    UpdateOrderStatusRequest, UpdateOrderStatusResponse,
};

/// How strictly the manager polices the status chain.
///
/// The back office historically accepted any of the five statuses as a
/// target regardless of the current one; `Permissive` preserves that.
/// `ForwardOnly` enforces `pending → preparing → ready → completed` with
/// `cancelled` from any non-terminal state, still allowing same-status
/// re-application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    #[default]
    Permissive,
    ForwardOnly,
}

fn map_repository_error(error: OrderRepositoryError) -> Error {
    match error {
        OrderRepositoryError::Connection { message } | OrderRepositoryError::Query { message } => {
            Error::persistence(format!("order status update failed: {message}"))
        }
    }
}

/// Lifecycle manager implementing the driving command port.
#[derive(Clone)]
pub struct OrderLifecycleService<R, D> {
    orders: Arc<R>,
    dispatcher: Arc<D>,
    policy: TransitionPolicy,
}

impl<R, D> OrderLifecycleService<R, D> {
    /// Create a manager with the given transition policy.
    pub fn new(orders: Arc<R>, dispatcher: Arc<D>, policy: TransitionPolicy) -> Self {
        Self {
            orders,
            dispatcher,
            policy,
        }
    }
}

#[async_trait]
impl<R, D> OrderLifecycleCommand for OrderLifecycleService<R, D>
where
    R: OrderRepository,
    D: NotificationDispatcher,
{
    async fn update_status(
        &self,
        request: UpdateOrderStatusRequest,
    ) -> Result<UpdateOrderStatusResponse, Error> {
        if request.acting_admin.is_nil() {
            return Err(Error::internal(
                "acting admin id must not be nil; the auth collaborator should have rejected this",
            ));
        }

        let new_status: OrderStatus = request
            .new_status
            .parse()
            .map_err(|err| Error::invalid_status(format!("{err}")))?;

        let order = self
            .orders
            .find_by_id(request.order_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::order_not_found(format!("order {} not found", request.order_id)))?;

        if self.policy == TransitionPolicy::ForwardOnly
            && !order.status().can_transition_to(new_status)
        {
            return Err(Error::invalid_transition(format!(
                "order {} cannot move from {} to {new_status}",
                request.order_id,
                order.status(),
            )));
        }

        // The note records that a notification was requested; dispatch
        // itself remains best-effort and happens after the commit.
        let audit = NewStatusAuditEntry::for_transition(
            request.order_id,
            new_status,
            request.acting_admin,
            request.notify_customer,
        );

        let applied = self
            .orders
            .apply_status_change(request.order_id, new_status, audit)
            .await
            .map_err(map_repository_error)?;
        if !applied {
            // The order vanished between the lookup and the write.
            return Err(Error::order_not_found(format!(
                "order {} not found",
                request.order_id
            )));
        }

        let mut customer_notified = false;
        if request.notify_customer {
            match self.dispatcher.send(request.order_id, new_status).await {
                Ok(sent) => {
                    customer_notified = sent;
                    info!(
                        order_id = request.order_id.value(),
                        status = %new_status,
                        sent,
                        "status notification dispatched"
                    );
                }
                Err(err) => {
                    warn!(
                        order_id = request.order_id.value(),
                        status = %new_status,
                        error = %err,
                        "status notification failed; status update stands"
                    );
                }
            }
        }

        Ok(UpdateOrderStatusResponse {
            order_id: request.order_id,
            status: new_status,
            customer_notified,
        })
    }
}

#[cfg(test)]
#[path = "order_lifecycle_service_tests.rs"]
mod tests;
