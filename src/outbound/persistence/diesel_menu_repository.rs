//! PostgreSQL-backed `MenuRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::menu::{Category, CategoryId, MenuItem, MenuItemDraft, MenuItemId};
use crate::domain::ports::{MenuRepository, MenuRepositoryError};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CategoryRow, MenuItemRow, MenuItemUpdate, NewCategoryRow, NewMenuItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::{categories, menu_items};

/// Diesel-backed implementation of the menu catalogue port.
#[derive(Clone)]
pub struct DieselMenuRepository {
    pool: DbPool,
}

impl DieselMenuRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MenuRepositoryError {
    map_basic_pool_error(error, MenuRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> MenuRepositoryError {
    map_basic_diesel_error(
        error,
        MenuRepositoryError::query,
        MenuRepositoryError::connection,
    )
}

fn row_to_item(row: MenuItemRow) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(row.id),
        name: row.name,
        description: row.description,
        price: row.price,
        category_id: CategoryId::new(row.category_id),
        image_path: row.image_path,
        is_available: row.is_available,
        created_at: row.created_at,
    }
}

#[async_trait]
impl MenuRepository for DieselMenuRepository {
    async fn create(&self, draft: MenuItemDraft) -> Result<MenuItemId, MenuRepositoryError> {
        draft
            .validate()
            .map_err(|err| MenuRepositoryError::query(err.to_string()))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewMenuItemRow {
            name: &draft.name,
            description: draft.description.as_deref(),
            price: draft.price,
            category_id: draft.category_id.value(),
            image_path: draft.image_path.as_deref(),
            is_available: draft.is_available,
        };

        let id = diesel::insert_into(menu_items::table)
            .values(&row)
            .returning(menu_items::id)
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(MenuItemId::new(id))
    }

    async fn update(
        &self,
        item_id: MenuItemId,
        draft: MenuItemDraft,
    ) -> Result<(), MenuRepositoryError> {
        draft
            .validate()
            .map_err(|err| MenuRepositoryError::query(err.to_string()))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = MenuItemUpdate {
            name: &draft.name,
            description: draft.description.as_deref(),
            price: draft.price,
            category_id: draft.category_id.value(),
            image_path: draft.image_path.as_deref(),
            is_available: draft.is_available,
        };

        let updated = diesel::update(menu_items::table.filter(menu_items::id.eq(item_id.value())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(MenuRepositoryError::not_found(format!(
                "menu item {}",
                item_id.value()
            )));
        }
        Ok(())
    }

    async fn set_available(
        &self,
        item_id: MenuItemId,
        is_available: bool,
    ) -> Result<(), MenuRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(menu_items::table.filter(menu_items::id.eq(item_id.value())))
            .set(menu_items::is_available.eq(is_available))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(MenuRepositoryError::not_found(format!(
                "menu item {}",
                item_id.value()
            )));
        }
        Ok(())
    }

    async fn delete(&self, item_id: MenuItemId) -> Result<(), MenuRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(menu_items::table.filter(menu_items::id.eq(item_id.value())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(MenuRepositoryError::not_found(format!(
                "menu item {}",
                item_id.value()
            )));
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        item_id: MenuItemId,
    ) -> Result<Option<MenuItem>, MenuRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = menu_items::table
            .filter(menu_items::id.eq(item_id.value()))
            .select(MenuItemRow::as_select())
            .first::<MenuItemRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_item))
    }

    async fn list(&self) -> Result<Vec<MenuItem>, MenuRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MenuItemRow> = menu_items::table
            .order(menu_items::name.asc())
            .select(MenuItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_item).collect())
    }

    async fn create_category(&self, name: String) -> Result<CategoryId, MenuRepositoryError> {
        if name.trim().is_empty() {
            return Err(MenuRepositoryError::query("category name must not be empty"));
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id = diesel::insert_into(categories::table)
            .values(&NewCategoryRow { name: &name })
            .returning(categories::id)
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(CategoryId::new(id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, MenuRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CategoryRow> = categories::table
            .order(categories::name.asc())
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|row| Category {
                id: CategoryId::new(row.id),
                name: row.name,
            })
            .collect())
    }

    async fn delete_category(&self, category_id: CategoryId) -> Result<(), MenuRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted =
            diesel::delete(categories::table.filter(categories::id.eq(category_id.value())))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(MenuRepositoryError::not_found(format!(
                "category {}",
                category_id.value()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for row conversion and error mapping.

    use chrono::Utc;
    use rstest::rstest;
    use rust_decimal::Decimal;

    use super::*;

    #[rstest]
    fn row_converts_to_a_menu_item() {
        let row = MenuItemRow {
            id: 12,
            name: "Chicken Rice".to_owned(),
            description: Some("With cucumber and chilli".to_owned()),
            price: Decimal::new(450, 2),
            category_id: 1,
            image_path: None,
            is_available: true,
            created_at: Utc::now(),
        };

        let item = row_to_item(row);

        assert_eq!(item.id, MenuItemId::new(12));
        assert_eq!(item.category_id, CategoryId::new(1));
        assert_eq!(item.price, Decimal::new(450, 2));
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let mapped = map_pool_error(PoolError::checkout("exhausted"));
        assert!(matches!(mapped, MenuRepositoryError::Connection { .. }));
    }
}
