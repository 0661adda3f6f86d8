//! Order aggregate and lifecycle status.
//!
//! Orders arrive from the customer-facing app and are only ever mutated by
//! the back office through status transitions. `total` and `order_date` are
//! fixed at creation; the lifecycle manager never rewrites them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque order identifier. Orders are numbered sequentially by the
/// customer-facing app and shown to staff as `#42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of the customer account that owns an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    #[cfg(test)]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the staff account acting on an order. Supplied by the auth
/// collaborator; the domain only requires it to be non-nil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminId(Uuid);

impl AdminId {
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    #[cfg(test)]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

/// Lifecycle status of an order.
///
/// The forward chain is `pending → preparing → ready → completed`;
/// `cancelled` is reachable from any non-terminal state. `completed` and
/// `cancelled` are terminal. Whether the chain is enforced depends on the
/// lifecycle service's transition policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

/// Error returned when a status string is not one of the five known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {value}")]
pub struct UnknownStatusError {
    pub value: String,
}

impl OrderStatus {
    /// All statuses, in forward-chain order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Wire string used in storage and audit notes.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal statuses admit no further transitions under the
    /// forward-only policy.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Whether the forward-only chain admits `self → next`.
    ///
    /// Re-applying the current status is always allowed; the write is
    /// idempotent on state even though each attempt is audited.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        if self == next {
            return true;
        }
        match (self, next) {
            (current, OrderStatus::Cancelled) => !current.is_terminal(),
            (OrderStatus::Pending, OrderStatus::Preparing)
            | (OrderStatus::Preparing, OrderStatus::Ready)
            | (OrderStatus::Ready, OrderStatus::Completed) => true,
            _ => false,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(UnknownStatusError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Validation errors returned by [`Order::new`] and [`OrderItem::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
    NegativeTotal,
    EmptyItemName,
    NegativeItemPrice,
    ZeroQuantity,
}

impl fmt::Display for OrderValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeTotal => write!(f, "order total must not be negative"),
            Self::EmptyItemName => write!(f, "order item name must not be empty"),
            Self::NegativeItemPrice => write!(f, "order item price must not be negative"),
            Self::ZeroQuantity => write!(f, "order item quantity must be at least 1"),
        }
    }
}

impl std::error::Error for OrderValidationError {}

/// Snapshot of a menu item at the time the order was placed.
///
/// The snapshot is deliberately denormalized: later edits to the menu must
/// not change what the customer ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    name: String,
    unit_price: Decimal,
    category: String,
    image_path: Option<String>,
    quantity: u32,
}

impl OrderItem {
    /// Validated constructor.
    pub fn new(
        name: impl Into<String>,
        unit_price: Decimal,
        category: impl Into<String>,
        image_path: Option<String>,
        quantity: u32,
    ) -> Result<Self, OrderValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(OrderValidationError::EmptyItemName);
        }
        if unit_price.is_sign_negative() {
            return Err(OrderValidationError::NegativeItemPrice);
        }
        if quantity == 0 {
            return Err(OrderValidationError::ZeroQuantity);
        }
        Ok(Self {
            name,
            unit_price,
            category: category.into(),
            image_path,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`. Informational only; the order total is not
    /// reconciled against item subtotals.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Plain data used to build a validated [`Order`].
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub id: OrderId,
    pub customer_id: Option<CustomerId>,
    pub status: OrderStatus,
    pub total: Decimal,
    pub order_date: DateTime<Utc>,
    pub pickup_location: Option<String>,
    pub special_instructions: Option<String>,
    pub items: Vec<OrderItem>,
}

/// A customer's submitted purchase request with a mutable lifecycle status.
///
/// ## Invariants
/// - `total` is non-negative and carries currency scale.
/// - `customer_id` may be absent: customer accounts can be deleted while
///   their orders remain.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    customer_id: Option<CustomerId>,
    status: OrderStatus,
    total: Decimal,
    order_date: DateTime<Utc>,
    pickup_location: Option<String>,
    special_instructions: Option<String>,
    items: Vec<OrderItem>,
}

impl Order {
    /// Validated constructor.
    pub fn new(draft: OrderDraft) -> Result<Self, OrderValidationError> {
        if draft.total.is_sign_negative() {
            return Err(OrderValidationError::NegativeTotal);
        }
        Ok(Self {
            id: draft.id,
            customer_id: draft.customer_id,
            status: draft.status,
            total: draft.total,
            order_date: draft.order_date,
            pickup_location: draft.pickup_location,
            special_instructions: draft.special_instructions,
            items: draft.items,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn pickup_location(&self) -> Option<&str> {
        self.pickup_location.as_deref()
    }

    pub fn special_instructions(&self) -> Option<&str> {
        self.special_instructions.as_deref()
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }
}
