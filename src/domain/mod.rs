//! Domain entities, services, and ports.
//!
//! The lifecycle manager and notification dispatcher are the only services
//! with behavior; everything else in the back office is a data contract
//! expressed as a port. Entities use validated constructors and document
//! their invariants in Rustdoc.

pub mod audit;
pub mod customer;
pub mod error;
pub mod menu;
pub mod notification;
pub mod order;
pub mod ports;
pub mod reporting;

mod notification_service;
mod order_lifecycle_service;

pub use self::audit::{AuditEntryId, NewStatusAuditEntry, StatusAuditEntry};
pub use self::customer::Customer;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::menu::{Category, CategoryId, MenuItem, MenuItemDraft, MenuItemId};
pub use self::notification::{
    NewNotification, Notification, NotificationId, NotificationMessage, message_for,
};
pub use self::notification_service::NotificationService;
pub use self::order::{
    AdminId, CustomerId, Order, OrderDraft, OrderId, OrderItem, OrderStatus, OrderValidationError,
    UnknownStatusError,
};
pub use self::order_lifecycle_service::{OrderLifecycleService, TransitionPolicy};
pub use self::reporting::SalesSummary;
