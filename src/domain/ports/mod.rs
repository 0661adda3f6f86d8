//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod audit_log_repository;
mod customer_repository;
mod menu_repository;
mod notification_dispatcher;
mod notification_repository;
mod order_lifecycle_command;
mod order_repository;
mod reporting_query;
mod settings_repository;

#[cfg(test)]
pub use audit_log_repository::MockAuditLogRepository;
pub use audit_log_repository::{
    AuditLogRepository, AuditLogRepositoryError, FixtureAuditLogRepository,
};
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
pub use customer_repository::{CustomerRepository, CustomerRepositoryError};
#[cfg(test)]
pub use menu_repository::MockMenuRepository;
pub use menu_repository::{MenuRepository, MenuRepositoryError};
#[cfg(test)]
pub use notification_dispatcher::MockNotificationDispatcher;
pub use notification_dispatcher::{
    FixtureNotificationDispatcher, NotificationDispatchError, NotificationDispatcher,
};
#[cfg(test)]
pub use notification_repository::MockNotificationRepository;
pub use notification_repository::{
    FixtureNotificationRepository, NotificationRepository, NotificationRepositoryError,
};
#[cfg(test)]
pub use order_lifecycle_command::MockOrderLifecycleCommand;
pub use order_lifecycle_command::{
    FixtureOrderLifecycleCommand, OrderLifecycleCommand, UpdateOrderStatusRequest,
    UpdateOrderStatusResponse,
};
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{FixtureOrderRepository, OrderRepository, OrderRepositoryError};
#[cfg(test)]
pub use reporting_query::MockReportingQuery;
pub use reporting_query::{ReportingQuery, ReportingQueryError};
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
pub use settings_repository::{Setting, SettingsRepository, SettingsRepositoryError};
