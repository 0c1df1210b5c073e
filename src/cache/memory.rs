use super::CacheStore;
use crate::types::CachedInventory;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use chrono::{DateTime, Duration, Utc};
use lfu_cache::LfuCache;

/// The default number of entries kept per tag.
pub const DEFAULT_CAPACITY: usize = 2000;

#[derive(Debug)]
struct Entry {
    value: CachedInventory,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

type LfuInventoryMap = LfuCache<String, Entry>;

/// Stores inventories in memory. Each tag has its own [`LfuCache`] to limit how many inventories
/// are kept in memory; when a tag is full the least frequently used entry is dropped. Expired
/// entries are dropped when they are next read.
/// 
/// Internally the cache is stored in an [`Arc`] wrapped in a [`Mutex`]. Clones share the same
/// entries.
/// 
/// # Examples
/// ```
/// use steam_inventory_cache::{InventoryLoader, MemoryCache};
/// 
/// let cache = MemoryCache::with_capacity(500);
/// let loader = InventoryLoader::builder()
///     .cache(cache.clone())
///     .build();
/// // Both loaders read and write the same entries.
/// let another_loader = InventoryLoader::builder()
///     .cache(cache)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct MemoryCache {
    inner: Arc<Mutex<HashMap<String, LfuInventoryMap>>>,
    capacity: usize,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl MemoryCache {
    /// Creates a new [`MemoryCache`] holding up to `capacity` entries per tag. A capacity of `0`
    /// is treated as `1`.
    pub fn with_capacity(
        capacity: usize,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }
    
    /// The number of entries kept per tag.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    
    /// The number of entries stored under `tag`, including entries that have expired but have
    /// not yet been dropped.
    pub fn len(&self, tag: &str) -> usize {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        
        inner.get(tag).map_or(0, LfuInventoryMap::len)
    }
    
    /// Whether no entries are stored under `tag`.
    pub fn is_empty(&self, tag: &str) -> bool {
        self.len(tag) == 0
    }
}

impl CacheStore for MemoryCache {
    fn has(&self, tag: &str, key: &str) -> bool {
        self.get(tag, key).is_some()
    }
    
    fn get(&self, tag: &str, key: &str) -> Option<CachedInventory> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let entries = inner.get_mut(tag)?;
        let key = key.to_string();
        let expired = match entries.get(&key) {
            Some(entry) if !entry.is_expired(Utc::now()) => {
                return Some(Arc::clone(&entry.value));
            },
            Some(_) => true,
            None => false,
        };
        
        if expired {
            log::debug!("Dropping expired inventory {tag}:{key}");
            entries.remove(&key);
        }
        
        None
    }
    
    fn put(&self, tag: &str, key: &str, value: CachedInventory, ttl: Duration) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let capacity = self.capacity;
        let entries = inner
            .entry(tag.to_string())
            .or_insert_with(|| LfuInventoryMap::with_capacity(capacity));
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .unwrap_or(if ttl < Duration::zero() {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            });
        
        entries.insert(key.to_string(), Entry {
            value,
            expires_at,
        });
    }
    
    fn forget(&self, tag: &str, key: &str) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        
        inner
            .get_mut(tag)
            .and_then(|entries| entries.remove(&key.to_string()))
            .is_some()
    }
    
    fn flush(&self, tag: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        
        inner.remove(tag);
    }
}
