//! Caching of fetched inventories.

mod memory;

pub use memory::{MemoryCache, DEFAULT_CAPACITY};

use crate::identifier::Identifier;
use crate::types::{CachedInventory, Minutes};
use chrono::Duration;

/// The default tag inventories are stored under.
pub const DEFAULT_CACHE_TAG: &str = "steam.inventory";
/// The default number of minutes inventories are cached for.
pub const DEFAULT_CACHE_TIME: Minutes = 60;

/// A key-value store where every entry is grouped under a tag and expires after a time-to-live.
/// Grouping by tag allows every entry under a tag to be removed at once.
/// 
/// Methods take `&self`; implementations are expected to handle their own synchronization.
pub trait CacheStore {
    /// Whether an unexpired entry exists for `key`.
    fn has(&self, tag: &str, key: &str) -> bool;
    
    /// Gets the entry for `key`, if it exists and has not expired.
    fn get(&self, tag: &str, key: &str) -> Option<CachedInventory>;
    
    /// Stores `value` under `key` for `ttl`, replacing any existing entry.
    fn put(&self, tag: &str, key: &str, value: CachedInventory, ttl: Duration);
    
    /// Removes the entry for `key`. Returns whether an entry was removed.
    fn forget(&self, tag: &str, key: &str) -> bool;
    
    /// Removes every entry under `tag`.
    fn flush(&self, tag: &str);
}

/// Converts minutes into a [`Duration`], saturating when out of range.
fn ttl_from_minutes(minutes: Minutes) -> Duration {
    Duration::try_minutes(minutes).unwrap_or(if minutes < 0 {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

/// A [`CacheStore`] scoped to a single tag with a fixed time-to-live, keyed by [`Identifier`].
#[derive(Debug, Clone)]
pub struct InventoryCache<C> {
    store: C,
    tag: String,
    ttl_minutes: Minutes,
}

impl<C: CacheStore> InventoryCache<C> {
    /// Creates a new [`InventoryCache`].
    pub fn new(store: C, tag: String, ttl_minutes: Minutes) -> Self {
        Self {
            store,
            tag,
            ttl_minutes,
        }
    }
    
    /// The tag entries are stored under.
    pub fn tag(&self) -> &str {
        &self.tag
    }
    
    /// The number of minutes entries are stored for.
    pub fn ttl_minutes(&self) -> Minutes {
        self.ttl_minutes
    }
    
    /// The underlying store.
    pub fn store(&self) -> &C {
        &self.store
    }
    
    /// Gets the cached inventory for `identifier`.
    pub fn get(&self, identifier: &Identifier) -> Option<CachedInventory> {
        self.store.get(&self.tag, identifier.as_str())
    }
    
    /// Caches `value` for `identifier` using the configured time-to-live.
    pub fn put(&self, identifier: &Identifier, value: CachedInventory) {
        self.put_for(identifier, value, self.ttl_minutes);
    }
    
    /// Caches `value` for `identifier` for `ttl_minutes`.
    pub fn put_for(&self, identifier: &Identifier, value: CachedInventory, ttl_minutes: Minutes) {
        self.store.put(&self.tag, identifier.as_str(), value, ttl_from_minutes(ttl_minutes));
    }
    
    /// Removes the entry stored under `key`. Returns whether an entry was removed.
    pub fn evict(&self, key: &str) -> bool {
        self.store.forget(&self.tag, key)
    }
    
    /// Removes every cached inventory.
    pub fn flush(&self) {
        self.store.flush(&self.tag);
    }
}
