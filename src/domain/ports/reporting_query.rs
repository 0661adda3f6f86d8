//! Port for sales reporting reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::reporting::SalesSummary;

use super::define_port_error;

define_port_error! {
    /// Errors raised by reporting adapters.
    pub enum ReportingQueryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "reporting query connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "reporting query failed: {message}",
    }
}

/// Port for aggregated order reporting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportingQuery: Send + Sync {
    /// Summarise orders placed in `[from, to)`.
    async fn sales_summary(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<SalesSummary, ReportingQueryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn query_error_formats_message() {
        let err = ReportingQueryError::query("aggregate failed");
        assert!(err.to_string().contains("aggregate failed"));
    }
}
