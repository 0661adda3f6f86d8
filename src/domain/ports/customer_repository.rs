//! Port for back-office customer administration.

use async_trait::async_trait;

use crate::domain::customer::Customer;
use crate::domain::order::CustomerId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by customer directory adapters.
    pub enum CustomerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "customer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "customer repository query failed: {message}",
    }
}

/// Port for reading and administering customer accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Customer>, CustomerRepositoryError>;

    /// All accounts, newest first.
    async fn list(&self) -> Result<Vec<Customer>, CustomerRepositoryError>;

    /// Activate or deactivate an account. Returns false when the account
    /// does not exist.
    async fn set_active(
        &self,
        customer_id: CustomerId,
        is_active: bool,
    ) -> Result<bool, CustomerRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn query_error_formats_message() {
        let err = CustomerRepositoryError::query("update failed");
        assert!(err.to_string().contains("update failed"));
    }
}
