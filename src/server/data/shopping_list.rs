use std::sync::Arc;

use crate::server::{
    data::store::{MemoryStore, Store},
    model::shopping_list::{RemoveItemsResult, ShoppingList},
};

/// Repository for shopping lists keyed by scope
///
/// The scope is a guild ID for the shared house list and a user ID for personal lists;
/// each kind of list gets its own repository instance so the two key spaces never mix.
/// Items are stored already normalized and never contain duplicates.
#[derive(Clone)]
pub struct ShoppingListRepository {
    store: Arc<dyn Store<u64, Vec<String>>>,
}

impl ShoppingListRepository {
    pub fn new(store: Arc<dyn Store<u64, Vec<String>>>) -> Self {
        Self { store }
    }

    /// Creates a repository backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Appends each item not already on the list, creating the list if needed
    ///
    /// # Arguments
    /// - `scope` - Guild or user ID owning the list
    /// - `items` - Normalized items in the order they should be appended
    pub async fn append_missing(&self, scope: u64, items: &[String]) {
        if items.is_empty() {
            return;
        }

        self.store
            .update(scope, &mut |slot: &mut Option<Vec<String>>| {
                let list = slot.get_or_insert_with(Vec::new);
                for item in items {
                    if !list.contains(item) {
                        list.push(item.clone());
                    }
                }
            })
            .await;
    }

    /// Removes each item found on the list
    ///
    /// # Arguments
    /// - `scope` - Guild or user ID owning the list
    /// - `items` - Normalized items to remove
    ///
    /// # Returns
    /// - `RemoveItemsResult` - Items removed and items that were not on the list
    pub async fn remove(&self, scope: u64, items: &[String]) -> RemoveItemsResult {
        let mut result = RemoveItemsResult::default();

        self.store
            .update(scope, &mut |slot: &mut Option<Vec<String>>| {
                for item in items {
                    let position = slot
                        .as_ref()
                        .and_then(|list| list.iter().position(|existing| existing == item));

                    match (position, slot.as_mut()) {
                        (Some(index), Some(list)) => {
                            list.remove(index);
                            result.removed.push(item.clone());
                        }
                        _ => result.not_found.push(item.clone()),
                    }
                }
            })
            .await;

        result
    }

    /// Gets the list for a scope, empty if nothing was ever added
    pub async fn get(&self, scope: u64) -> ShoppingList {
        ShoppingList {
            items: self.store.get(&scope).await.unwrap_or_default(),
        }
    }
}
