//! Domain models for shopping list operations

/// Snapshot of a shopping list in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    pub items: Vec<String>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Outcome of removing items from a shopping list
///
/// Both partitions keep the order the items were given in. An item missing from the
/// list is not an error, it is reported in `not_found` alongside any successes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveItemsResult {
    pub removed: Vec<String>,
    pub not_found: Vec<String>,
}

impl RemoveItemsResult {
    /// Returns true when no item was provided at all
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.not_found.is_empty()
    }
}
