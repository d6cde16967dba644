use crate::server::{
    data::shopping_list::ShoppingListRepository,
    model::shopping_list::{RemoveItemsResult, ShoppingList},
    util::parse::split_items,
};

/// Service for one kind of shopping list (house or personal)
#[derive(Clone)]
pub struct ShoppingListService {
    repo: ShoppingListRepository,
}

impl ShoppingListService {
    pub fn new(repo: ShoppingListRepository) -> Self {
        Self { repo }
    }

    /// Adds comma separated items to a list
    ///
    /// Items are trimmed and lower-cased; blank tokens are dropped and items already on
    /// the list are silently ignored. New items are appended in first-seen order.
    ///
    /// # Arguments
    /// - `scope` - Guild or user ID owning the list
    /// - `raw_items` - Comma separated items as typed by the user
    pub async fn add_items(&self, scope: u64, raw_items: &str) {
        let items = split_items(raw_items);

        self.repo.append_missing(scope, &items).await;
    }

    /// Removes comma separated items from a list
    ///
    /// # Arguments
    /// - `scope` - Guild or user ID owning the list
    /// - `raw_items` - Comma separated items as typed by the user
    ///
    /// # Returns
    /// - `RemoveItemsResult` - Removed items and items that were not on the list, both in
    ///   input order
    pub async fn remove_items(&self, scope: u64, raw_items: &str) -> RemoveItemsResult {
        let items = split_items(raw_items);

        self.repo.remove(scope, &items).await
    }

    /// Gets the items of a list in insertion order
    pub async fn get_list(&self, scope: u64) -> ShoppingList {
        self.repo.get(scope).await
    }
}
