//! Menu catalogue entities for the back-office data contracts.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(i64);

impl MenuItemId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// Identifier of a menu category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i64);

impl CategoryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// Validation errors returned by the menu constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuValidationError {
    EmptyName,
    NegativePrice,
}

impl fmt::Display for MenuValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NegativePrice => write!(f, "price must not be negative"),
        }
    }
}

impl std::error::Error for MenuValidationError {}

/// Fields for creating or updating a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: CategoryId,
    pub image_path: Option<String>,
    pub is_available: bool,
}

impl MenuItemDraft {
    /// Reject drafts the catalogue would never accept.
    pub fn validate(&self) -> Result<(), MenuValidationError> {
        if self.name.trim().is_empty() {
            return Err(MenuValidationError::EmptyName);
        }
        if self.price.is_sign_negative() {
            return Err(MenuValidationError::NegativePrice);
        }
        Ok(())
    }
}

/// A dish or drink offered by the canteen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: CategoryId,
    pub image_path: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// A menu grouping such as "Mains" or "Drinks".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
