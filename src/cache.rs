//! Memo tables computing each value at most once.

use crate::error::Result;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Mutex, OnceLock};

type Slot<V> = Arc<OnceLock<Arc<V>>>;

/// An append-only map whose values are computed on first request.
///
/// The table lock is only held while fetching the slot of a key, so a
/// computation may itself query the map for other keys. Requesting a key
/// from inside its own computation deadlocks.
pub struct OnceMap<K, V> {
    table: Mutex<HashMap<K, Slot<V>>>,
}

impl<K, V> Default for OnceMap<K, V> {
    fn default() -> Self {
        Self {
            table: Mutex::new(HashMap::new()),
        }
    }
}

impl<K, V> fmt::Debug for OnceMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let len = self.table.lock().map(|t| t.len()).unwrap_or(0);
        f.debug_struct("OnceMap").field("keys", &len).finish()
    }
}

impl<K, V> OnceMap<K, V>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: &K) -> Slot<V> {
        let mut table = self.table.lock().expect("poisoned memo table");
        table.entry(key.clone()).or_default().clone()
    }

    /// The value of `key` if it has already been computed.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let table = self.table.lock().expect("poisoned memo table");
        table.get(key).and_then(|slot| slot.get().cloned())
    }

    /// The value of `key`, computed by `create` if needed.
    pub fn get_or_init<F>(&self, key: &K, create: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        self.slot(key).get_or_init(|| Arc::new(create())).clone()
    }

    /// The value of `key`, computed by `create` if needed.
    ///
    /// On error nothing is stored and a later call tries again.
    pub fn get_or_try_init<F>(&self, key: &K, create: F) -> Result<Arc<V>>
    where
        F: FnOnce() -> Result<V>,
    {
        let slot = self.slot(key);
        if let Some(value) = slot.get() {
            return Ok(value.clone());
        }
        let value = create()?;
        // If another thread won the race its value is kept.
        Ok(slot.get_or_init(|| Arc::new(value)).clone())
    }

    /// Number of computed values.
    pub fn len(&self) -> usize {
        let table = self.table.lock().expect("poisoned memo table");
        table.values().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
