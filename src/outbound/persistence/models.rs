//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::schema::{
    categories, menu_items, notifications, order_items, order_status_history, orders, settings,
    users,
};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub display_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Menu models
// ---------------------------------------------------------------------------

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i64,
    pub name: String,
}

/// Insertable struct for creating categories.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub name: &'a str,
}

/// Row struct for reading from the menu_items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = menu_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MenuItemRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: i64,
    pub image_path: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating menu items.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = menu_items)]
pub(crate) struct NewMenuItemRow<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: Decimal,
    pub category_id: i64,
    pub image_path: Option<&'a str>,
    pub is_available: bool,
}

/// Changeset struct for updating menu items.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = menu_items)]
pub(crate) struct MenuItemUpdate<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: Decimal,
    pub category_id: i64,
    pub image_path: Option<&'a str>,
    pub is_available: bool,
}

// ---------------------------------------------------------------------------
// Order models
// ---------------------------------------------------------------------------

/// Row struct for reading from the orders table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderRow {
    pub id: i64,
    pub customer_id: Option<Uuid>,
    pub status: String,
    pub total: Decimal,
    pub order_date: DateTime<Utc>,
    pub pickup_location: Option<String>,
    pub special_instructions: Option<String>,
}

/// Row struct for reading from the order_items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderItemRow {
    #[expect(dead_code, reason = "primary key read for completeness; items are keyed by order")]
    pub id: i64,
    #[expect(dead_code, reason = "already known from the enclosing order lookup")]
    pub order_id: i64,
    pub item_name: String,
    pub unit_price: Decimal,
    pub category_name: String,
    pub image_path: Option<String>,
    pub quantity: i32,
}

// ---------------------------------------------------------------------------
// Audit trail models
// ---------------------------------------------------------------------------

/// Row struct for reading from the order_status_history table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = order_status_history)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AuditEntryRow {
    pub id: i64,
    pub order_id: i64,
    pub status: String,
    pub admin_id: Uuid,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for appending audit entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = order_status_history)]
pub(crate) struct NewAuditEntryRow<'a> {
    pub order_id: i64,
    pub status: &'a str,
    pub admin_id: Uuid,
    pub note: &'a str,
}

// ---------------------------------------------------------------------------
// Notification models
// ---------------------------------------------------------------------------

/// Row struct for reading from the notifications table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = notifications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct NotificationRow {
    pub id: i64,
    pub user_id: Uuid,
    pub order_id: i64,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating notifications. The read flag and
/// timestamp take their column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notifications)]
pub(crate) struct NewNotificationRow<'a> {
    pub user_id: Uuid,
    pub order_id: i64,
    pub title: &'a str,
    pub message: &'a str,
}

// ---------------------------------------------------------------------------
// Settings models
// ---------------------------------------------------------------------------

/// Row struct for reading from the settings table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = settings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SettingRow {
    pub key: String,
    pub value: String,
    #[expect(dead_code, reason = "schema field read for future change display")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for upserting settings.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = settings)]
pub(crate) struct NewSettingRow<'a> {
    pub key: &'a str,
    pub value: &'a str,
}
