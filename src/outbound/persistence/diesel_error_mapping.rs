//! Shared Diesel error mapping for repositories with basic query semantics.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map common Diesel error variants into query/connection constructors.
///
/// Repositories here share the same semantics: `NotFound` and query-builder
/// failures are query errors, a closed connection is a connection error.
pub(crate) fn map_basic_diesel_error<E, Q, C>(
    error: diesel::result::Error,
    query: Q,
    connection: C,
) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => query("database error"),
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ports::OrderRepositoryError;

    #[rstest]
    fn pool_errors_map_to_connection_variant() {
        let mapped: OrderRepositoryError = map_basic_pool_error(
            PoolError::checkout("timed out"),
            OrderRepositoryError::connection,
        );
        assert!(matches!(mapped, OrderRepositoryError::Connection { .. }));
        assert!(mapped.to_string().contains("timed out"));
    }

    #[rstest]
    fn not_found_maps_to_query_variant() {
        let mapped: OrderRepositoryError = map_basic_diesel_error(
            diesel::result::Error::NotFound,
            OrderRepositoryError::query,
            OrderRepositoryError::connection,
        );
        assert!(matches!(mapped, OrderRepositoryError::Query { .. }));
        assert!(mapped.to_string().contains("record not found"));
    }
}
