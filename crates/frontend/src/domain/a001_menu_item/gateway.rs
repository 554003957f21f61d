use super::error::{AggregateFetchError, GatewayError, MutationError};
use super::store::MenuSnapshot;
use async_trait::async_trait;
use contracts::domain::a001_menu_item::{MenuItem, MenuItemDraft, MenuItemId};
use contracts::enums::Category;
use futures::future::try_join_all;

/// Boundary to the menu API: one collection of items per category.
///
/// Futures are `?Send`: the client runs on the single-threaded browser executor.
#[async_trait(?Send)]
pub trait MenuGateway {
    /// Read one category collection
    async fn fetch_category(&self, category: Category) -> Result<Vec<MenuItem>, GatewayError>;

    async fn create_item(
        &self,
        category: Category,
        draft: &MenuItemDraft,
    ) -> Result<MenuItem, MutationError>;

    async fn update_item(
        &self,
        category: Category,
        id: MenuItemId,
        draft: &MenuItemDraft,
    ) -> Result<MenuItem, MutationError>;

    async fn delete_item(&self, category: Category, id: MenuItemId) -> Result<(), MutationError>;

    /// Reads every registry category concurrently.
    ///
    /// All-or-nothing: the first failing read fails the whole load and the
    /// results of the other reads are dropped.
    async fn fetch_all(&self) -> Result<MenuSnapshot, AggregateFetchError> {
        let reads = Category::all().iter().map(|&category| async move {
            self.fetch_category(category)
                .await
                .map(|items| (category, items))
                .map_err(|source| AggregateFetchError { category, source })
        });
        let loaded = try_join_all(reads).await?;
        Ok(MenuSnapshot::from_loaded(loaded))
    }
}
