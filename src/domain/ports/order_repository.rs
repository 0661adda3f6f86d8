//! Port for order persistence: lookups, owner resolution, and the
//! transactional status change.

use async_trait::async_trait;

use crate::domain::audit::NewStatusAuditEntry;
use crate::domain::order::{CustomerId, Order, OrderId, OrderStatus};

use super::define_port_error;

define_port_error! {
    /// Errors raised by order repository adapters.
    pub enum OrderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "order repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "order repository query failed: {message}",
    }
}

/// Port for reading orders and applying status changes.
///
/// `apply_status_change` performs the status update and the audit append in
/// one transaction so a crash between the two writes cannot leave a changed
/// order without its trail. There is no version check: concurrent admins
/// race last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find an order with its item snapshots.
    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>, OrderRepositoryError>;

    /// Resolve the order's owning customer, skipping owners whose account
    /// no longer exists. `Ok(None)` is a normal outcome.
    async fn find_owner(
        &self,
        order_id: OrderId,
    ) -> Result<Option<CustomerId>, OrderRepositoryError>;

    /// Atomically set the order status and append the audit entry.
    ///
    /// Returns `Ok(false)` when no order row matched; nothing is written in
    /// that case.
    async fn apply_status_change(
        &self,
        order_id: OrderId,
        new_status: OrderStatus,
        audit: NewStatusAuditEntry,
    ) -> Result<bool, OrderRepositoryError>;
}

/// Fixture implementation for tests that do not exercise order persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOrderRepository;

#[async_trait]
impl OrderRepository for FixtureOrderRepository {
    async fn find_by_id(&self, _order_id: OrderId) -> Result<Option<Order>, OrderRepositoryError> {
        Ok(None)
    }

    async fn find_owner(
        &self,
        _order_id: OrderId,
    ) -> Result<Option<CustomerId>, OrderRepositoryError> {
        Ok(None)
    }

    async fn apply_status_change(
        &self,
        _order_id: OrderId,
        _new_status: OrderStatus,
        _audit: NewStatusAuditEntry,
    ) -> Result<bool, OrderRepositoryError> {
        Ok(true)
    }
}
