//! Port for menu catalogue administration.

use async_trait::async_trait;

use crate::domain::menu::{Category, CategoryId, MenuItem, MenuItemDraft, MenuItemId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by menu catalogue adapters.
    pub enum MenuRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "menu repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "menu repository query failed: {message}",
        /// The referenced item or category does not exist.
        NotFound { message: String } =>
            "menu record not found: {message}",
    }
}

/// Port for menu item and category CRUD.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn create(&self, draft: MenuItemDraft) -> Result<MenuItemId, MenuRepositoryError>;

    async fn update(
        &self,
        item_id: MenuItemId,
        draft: MenuItemDraft,
    ) -> Result<(), MenuRepositoryError>;

    /// Toggle an item's availability without touching the rest of the row.
    async fn set_available(
        &self,
        item_id: MenuItemId,
        is_available: bool,
    ) -> Result<(), MenuRepositoryError>;

    async fn delete(&self, item_id: MenuItemId) -> Result<(), MenuRepositoryError>;

    async fn find_by_id(
        &self,
        item_id: MenuItemId,
    ) -> Result<Option<MenuItem>, MenuRepositoryError>;

    async fn list(&self) -> Result<Vec<MenuItem>, MenuRepositoryError>;

    async fn create_category(&self, name: String) -> Result<CategoryId, MenuRepositoryError>;

    async fn list_categories(&self) -> Result<Vec<Category>, MenuRepositoryError>;

    async fn delete_category(&self, category_id: CategoryId) -> Result<(), MenuRepositoryError>;
}
