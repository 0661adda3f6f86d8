//! Status audit trail entries.
//!
//! One entry is appended per transition attempt that commits. Entries are
//! immutable and never deleted; staff read them newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::{AdminId, OrderId, OrderStatus};

/// Identifier assigned to an audit entry by the datastore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditEntryId(i64);

impl AuditEntryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// Data for an audit entry that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStatusAuditEntry {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub acting_admin: AdminId,
    pub note: String,
}

impl NewStatusAuditEntry {
    /// Build the entry with the note the back office has always written:
    /// `"Status changed to {status}"`, with `" - Customer notified"`
    /// appended when a notification was requested.
    pub fn for_transition(
        order_id: OrderId,
        status: OrderStatus,
        acting_admin: AdminId,
        customer_notified: bool,
    ) -> Self {
        let mut note = format!("Status changed to {status}");
        if customer_notified {
            note.push_str(" - Customer notified");
        }
        Self {
            order_id,
            status,
            acting_admin,
            note,
        }
    }
}

/// Immutable record of one status transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusAuditEntry {
    pub id: AuditEntryId,
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub acting_admin: AdminId,
    pub note: String,
    pub created_at: DateTime<Utc>,
}
