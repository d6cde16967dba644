//! Key-value store abstraction backing all repositories.
//!
//! All bot state lives in process memory and is lost on restart. Repositories talk to
//! a `Store` rather than a concrete map so the service layer can be exercised without a
//! gateway connection, and so a persistent backend can be swapped in later.

use serenity::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keyed storage with atomic read-modify-write.
#[async_trait]
pub trait Store<K, V>: Send + Sync
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Returns a copy of the value stored under `key`.
    async fn get(&self, key: &K) -> Option<V>;

    /// Stores `value` under `key`, returning the value it replaced.
    async fn put(&self, key: K, value: V) -> Option<V>;

    /// Removes and returns the value stored under `key`.
    async fn delete(&self, key: &K) -> Option<V>;

    /// Applies `apply` to the slot for `key` while holding exclusive access.
    ///
    /// The slot is `None` when nothing is stored. Leaving it `None` after `apply`
    /// returns removes the entry; leaving it `Some` stores the value.
    async fn update(&self, key: K, apply: &mut (dyn for<'s> FnMut(&'s mut Option<V>) + Send));
}

/// In-memory store shared between clones.
///
/// Initialized empty. Clones share the same underlying map.
pub struct MemoryStore<K, V> {
    entries: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> MemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<K, V> Clone for MemoryStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<K, V> Default for MemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K, V> Store<K, V> for MemoryStore<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        self.entries.read().await.get(key).cloned()
    }

    async fn put(&self, key: K, value: V) -> Option<V> {
        self.entries.write().await.insert(key, value)
    }

    async fn delete(&self, key: &K) -> Option<V> {
        self.entries.write().await.remove(key)
    }

    async fn update(&self, key: K, apply: &mut (dyn for<'s> FnMut(&'s mut Option<V>) + Send)) {
        let mut entries = self.entries.write().await;

        let mut slot = entries.remove(&key);
        apply(&mut slot);

        if let Some(value) = slot {
            entries.insert(key, value);
        }
    }
}
