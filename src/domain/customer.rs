//! Customer account records for back-office user administration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::CustomerId;

/// A customer account as seen by the back office.
///
/// Deactivated accounts keep their orders; the lifecycle manager treats a
/// missing owner as a normal condition, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub display_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
