mod builder;
mod config;

pub use builder::InventoryLoaderBuilder;
pub use config::InventoryConfig;

use crate::cache::{CacheStore, InventoryCache, MemoryCache};
use crate::enums::Language;
use crate::error::Error;
use crate::fetcher::{FetchedInventory, InventoryFetcher};
use crate::identifier::{normalize, Identifier};
use crate::inventory::{LoadedInventory, LoadSource};
use crate::request::InventoryRequest;
use crate::transport::Transport;
use crate::types::{AppId, ContextId, DEFAULT_APPID, DEFAULT_CONTEXTID};
use std::sync::Arc;
use reqwest_middleware::ClientWithMiddleware;

/// Loads inventories, serving them from the cache when possible.
///
/// Inventories are cached by owner only. Loading a different app or context for an owner whose
/// inventory is already cached returns the cached inventory.
///
/// The loader holds no state about previous loads; each call to [`InventoryLoader::load`]
/// returns its own [`LoadedInventory`]. A single loader can be shared between tasks.
///
/// # Examples
/// ```no_run
/// use steam_inventory_cache::InventoryLoader;
///
/// # async fn run() -> Result<(), steam_inventory_cache::Error> {
/// let loader = InventoryLoader::new();
/// let inventory = loader.load("76561198233097000").await?;
///
/// for item in inventory.descriptions() {
///     println!("{} ({})", item.name, item.exterior.unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InventoryLoader<T = ClientWithMiddleware, C = MemoryCache> {
    fetcher: InventoryFetcher<T>,
    cache: InventoryCache<C>,
    language: Language,
    include_untradable: bool,
}

impl InventoryLoader {
    /// Creates a new [`InventoryLoader`] with the default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }
    
    /// Creates a new [`InventoryLoader`] from `config`, using the default client and an
    /// in-memory cache sized by `config.cache_capacity`.
    pub fn from_config(config: InventoryConfig) -> Self {
        let cache = MemoryCache::with_capacity(config.cache_capacity);
        
        Self::builder()
            .cache(cache)
            .config(config)
            .build()
    }
    
    /// Builder for constructing an [`InventoryLoader`].
    pub fn builder() -> InventoryLoaderBuilder {
        InventoryLoaderBuilder::new()
    }
}

impl Default for InventoryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> InventoryLoader<T, C>
where
    T: Transport,
    C: CacheStore,
{
    /// The cache inventories are stored in.
    pub fn cache(&self) -> &InventoryCache<C> {
        &self.cache
    }
    
    /// The fetcher used on cache misses.
    pub fn fetcher(&self) -> &InventoryFetcher<T> {
        &self.fetcher
    }
    
    /// The language for item descriptions.
    pub fn language(&self) -> Language {
        self.language
    }
    
    /// Loads the inventory for app 730, context 2. See [`InventoryLoader::load_inventory`].
    pub async fn load(
        &self,
        identifier: &str,
    ) -> Result<LoadedInventory, Error> {
        self.load_inventory(identifier, DEFAULT_APPID, DEFAULT_CONTEXTID).await
    }
    
    /// Loads an inventory. `identifier` may be a 64-bit Steam ID or a legacy `STEAM_X:Y:Z` ID.
    ///
    /// A cached inventory is returned without making a request. Otherwise the inventory is
    /// fetched and, if the response is an object, cached. A response that is not an object
    /// (such as `null` for a private inventory) is not cached and the returned inventory is
    /// not loaded.
    ///
    /// Fails if the identifier is malformed, the app or context ID is zero, or the fetch
    /// fails. Nothing is cached on failure.
    pub async fn load_inventory(
        &self,
        identifier: &str,
        appid: AppId,
        contextid: ContextId,
    ) -> Result<LoadedInventory, Error> {
        let identifier = normalize(identifier)?;
        
        self.load_identifier(identifier, appid, contextid).await
    }
    
    /// Loads an inventory for an already normalized identifier. See
    /// [`InventoryLoader::load_inventory`].
    pub async fn load_identifier(
        &self,
        identifier: Identifier,
        appid: AppId,
        contextid: ContextId,
    ) -> Result<LoadedInventory, Error> {
        if let Some(payload) = self.cache.get(&identifier) {
            log::debug!("Inventory for {identifier} loaded from cache");
            return Ok(LoadedInventory::new(
                identifier,
                payload,
                LoadSource::Cache,
                self.include_untradable,
            ));
        }
        
        let request = InventoryRequest::new(identifier)
            .app(appid, contextid)
            .language(self.language);
        
        match self.fetcher.fetch(&request).await? {
            FetchedInventory::Inventory(inventory) => {
                let payload = Arc::new(inventory);
                
                self.cache.put(&request.identifier, Arc::clone(&payload));
                
                Ok(LoadedInventory::new(
                    request.identifier,
                    payload,
                    LoadSource::Network,
                    self.include_untradable,
                ))
            },
            FetchedInventory::Unexpected(_) => {
                log::warn!("Inventory for {} was not an object and will not be cached", request.identifier);
                
                Ok(LoadedInventory::not_loaded(request.identifier, self.include_untradable))
            },
        }
    }
    
    /// Removes the cached inventory for `identifier`. Returns whether an entry was removed.
    ///
    /// The identifier is normalized the same way as when loading. An identifier that cannot be
    /// normalized is used as given (trimmed).
    pub fn clear_cache(&self, identifier: &str) -> bool {
        match normalize(identifier) {
            Ok(identifier) => self.cache.evict(identifier.as_str()),
            Err(error) => {
                log::debug!("Evicting {identifier:?} without normalizing: {error}");
                self.cache.evict(identifier.trim())
            },
        }
    }
    
    /// Removes every cached inventory.
    pub fn flush_cache(&self) {
        self.cache.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, FetchError};
    use crate::inventory::LoadState;
    use crate::transport::HttpResponse;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use bytes::Bytes;
    use reqwest::StatusCode;
    
    const STEAMID: &str = "76561198233097000";
    const INVENTORY: &str = include_str!("../response/fixtures/inventory_730.json");
    
    /// Counts requests and responds with a fixed body.
    #[derive(Debug, Default)]
    struct CountingTransport {
        body: &'static str,
        fail: bool,
        calls: AtomicUsize,
    }
    
    impl CountingTransport {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                ..Default::default()
            }
        }
        
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }
    
    impl Transport for &CountingTransport {
        async fn get_url(&self, _url: &str) -> Result<HttpResponse, anyhow::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            
            if self.fail {
                return Err(anyhow::anyhow!("connection reset"));
            }
            
            Ok(HttpResponse {
                status: StatusCode::OK,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }
    
    fn loader(transport: &CountingTransport) -> InventoryLoader<&CountingTransport, MemoryCache> {
        InventoryLoader::builder()
            .transport(transport)
            .build()
    }
    
    fn calls(transport: &CountingTransport) -> usize {
        transport.calls.load(Ordering::SeqCst)
    }
    
    #[tokio::test]
    async fn second_load_is_served_from_cache() {
        let transport = CountingTransport::new(INVENTORY);
        let loader = loader(&transport);
        let first = loader.load(STEAMID).await.unwrap();
        let second = loader.load(STEAMID).await.unwrap();
        
        assert_eq!(calls(&transport), 1);
        assert_eq!(first.source(), LoadSource::Network);
        assert_eq!(second.source(), LoadSource::Cache);
        assert_eq!(first.payload(), second.payload());
        assert_eq!(second.state(), LoadState::Loaded);
    }
    
    #[tokio::test]
    async fn legacy_and_canonical_identifiers_share_an_entry() {
        let transport = CountingTransport::new(INVENTORY);
        let loader = loader(&transport);
        
        loader.load("STEAM_0:1:5").await.unwrap();
        
        let inventory = loader.load(" 76561197960265735 ").await.unwrap();
        
        assert_eq!(calls(&transport), 1);
        assert_eq!(inventory.identifier().as_str(), "76561197960265735");
    }
    
    #[tokio::test]
    async fn non_object_body_is_not_cached() {
        let transport = CountingTransport::new("null");
        let loader = loader(&transport);
        let inventory = loader.load(STEAMID).await.unwrap();
        
        assert_eq!(inventory.state(), LoadState::NotLoaded);
        assert_eq!(inventory.inventory(), None);
        assert!(loader.cache().get(inventory.identifier()).is_none());
        
        loader.load(STEAMID).await.unwrap();
        
        assert_eq!(calls(&transport), 2);
    }
    
    #[tokio::test]
    async fn unsuccessful_object_is_cached() {
        let transport = CountingTransport::new(r#"{"success":false}"#);
        let loader = loader(&transport);
        let inventory = loader.load(STEAMID).await.unwrap();
        
        assert!(inventory.is_loaded());
        assert_eq!(inventory.inventory_with_descriptions(2), None);
        
        loader.load(STEAMID).await.unwrap();
        
        assert_eq!(calls(&transport), 1);
    }
    
    #[tokio::test]
    async fn clear_cache_forces_a_new_request() {
        let transport = CountingTransport::new(INVENTORY);
        let loader = loader(&transport);
        
        loader.load(STEAMID).await.unwrap();
        
        assert!(loader.clear_cache(STEAMID));
        
        loader.load(STEAMID).await.unwrap();
        
        assert_eq!(calls(&transport), 2);
    }
    
    #[tokio::test]
    async fn clear_cache_normalizes_legacy_identifiers() {
        let transport = CountingTransport::new(INVENTORY);
        let loader = loader(&transport);
        
        loader.load("76561197960265735").await.unwrap();
        
        assert!(loader.clear_cache("STEAM_0:1:5"));
        assert!(!loader.clear_cache("not an id"));
    }
    
    #[tokio::test]
    async fn flush_cache_forces_new_requests() {
        let transport = CountingTransport::new(INVENTORY);
        let loader = loader(&transport);
        
        loader.load(STEAMID).await.unwrap();
        loader.load("STEAM_0:1:5").await.unwrap();
        loader.flush_cache();
        loader.load(STEAMID).await.unwrap();
        loader.load("STEAM_0:1:5").await.unwrap();
        
        assert_eq!(calls(&transport), 4);
    }
    
    #[tokio::test]
    async fn cache_is_keyed_by_identifier_only() {
        let transport = CountingTransport::new(INVENTORY);
        let loader = loader(&transport);
        
        loader.load_inventory(STEAMID, 730, 2).await.unwrap();
        
        let inventory = loader.load_inventory(STEAMID, 440, 2).await.unwrap();
        
        assert_eq!(calls(&transport), 1);
        assert_eq!(inventory.source(), LoadSource::Cache);
    }
    
    #[tokio::test]
    async fn malformed_identifier_fails_without_request() {
        let transport = CountingTransport::new(INVENTORY);
        let loader = loader(&transport);
        let error = loader.load("STEAM_0:1").await.unwrap_err();
        
        assert_eq!(error.kind(), ErrorKind::MalformedIdentifier);
        assert_eq!(calls(&transport), 0);
    }
    
    #[tokio::test]
    async fn invalid_parameter_fails_without_request() {
        let transport = CountingTransport::new(INVENTORY);
        let loader = loader(&transport);
        let error = loader.load_inventory(STEAMID, 0, 2).await.unwrap_err();
        
        assert_eq!(error.kind(), ErrorKind::InvalidParameter);
        assert_eq!(calls(&transport), 0);
    }
    
    #[tokio::test]
    async fn fetch_failure_caches_nothing() {
        let transport = CountingTransport::failing();
        let loader = loader(&transport);
        let error = loader.load(STEAMID).await.unwrap_err();
        
        assert!(matches!(error, Error::Fetch(FetchError::Transport(_))));
        assert!(loader.cache().store().is_empty("steam.inventory"));
    }
    
    #[tokio::test]
    async fn expired_entries_are_fetched_again() {
        let transport = CountingTransport::new(INVENTORY);
        let loader = InventoryLoader::builder()
            .transport(&transport)
            .cache_time(0)
            .build();
        
        loader.load(STEAMID).await.unwrap();
        loader.load(STEAMID).await.unwrap();
        
        assert_eq!(calls(&transport), 2);
    }
    
    #[tokio::test]
    async fn loaders_can_share_a_cache() {
        let transport = CountingTransport::new(INVENTORY);
        let cache = MemoryCache::default();
        let a = InventoryLoader::builder()
            .transport(&transport)
            .cache(cache.clone())
            .build();
        let b = InventoryLoader::builder()
            .transport(&transport)
            .cache(cache)
            .build();
        
        a.load(STEAMID).await.unwrap();
        
        let inventory = b.load(STEAMID).await.unwrap();
        
        assert_eq!(calls(&transport), 1);
        assert_eq!(inventory.source(), LoadSource::Cache);
    }
    
    #[test]
    fn from_config_sizes_the_cache() {
        let config = InventoryConfig {
            cache_capacity: 5,
            ..Default::default()
        };
        let loader = InventoryLoader::from_config(config.clone());
        
        assert_eq!(loader.cache().store().capacity(), 5);
        
        // the builder keeps the cache it was given
        let loader = InventoryLoader::builder()
            .cache(MemoryCache::with_capacity(8))
            .config(config)
            .build();
        
        assert_eq!(loader.cache().store().capacity(), 8);
    }
    
    #[tokio::test]
    async fn capacity_from_config_bounds_cached_inventories() {
        let transport = CountingTransport::new(INVENTORY);
        let config = InventoryConfig {
            cache_capacity: 1,
            ..Default::default()
        };
        let loader = InventoryLoader::builder()
            .transport(&transport)
            .cache(MemoryCache::with_capacity(config.cache_capacity))
            .config(config)
            .build();
        
        loader.load(STEAMID).await.unwrap();
        loader.load("STEAM_0:1:5").await.unwrap();
        
        assert_eq!(loader.cache().store().len("steam.inventory"), 1);
    }
    
    #[tokio::test]
    async fn applies_configuration() {
        let transport = CountingTransport::new(INVENTORY);
        let config: InventoryConfig = serde_json::from_str(r#"{
            "cache_tag": "inventories",
            "include_untradable": true,
            "language": "french"
        }"#).unwrap();
        let loader = InventoryLoader::builder()
            .transport(&transport)
            .config(config)
            .build();
        let inventory = loader.load(STEAMID).await.unwrap();
        
        assert_eq!(loader.language(), Language::French);
        assert_eq!(loader.cache().tag(), "inventories");
        assert!(loader.cache().store().has("inventories", STEAMID));
        // the untradable service medal is included
        assert_eq!(inventory.descriptions().len(), 3);
    }
}
