use super::{InventoryLoader, InventoryConfig};
use crate::cache::{CacheStore, MemoryCache, InventoryCache};
use crate::enums::Language;
use crate::fetcher::InventoryFetcher;
use crate::helpers::{get_default_middleware, USER_AGENT_STRING};
use crate::transport::Transport;
use crate::types::Minutes;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing an [`InventoryLoader`].
#[derive(Debug, Clone)]
pub struct InventoryLoaderBuilder<T = ClientWithMiddleware, C = MemoryCache> {
    /// The transport used to fetch inventories.
    pub(crate) transport: T,
    /// The store inventories are cached in.
    pub(crate) cache: C,
    /// Everything else.
    pub(crate) config: InventoryConfig,
}

impl Default for InventoryLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryLoaderBuilder {
    /// Creates a new [`InventoryLoaderBuilder`] using the default client and an in-memory cache.
    pub fn new() -> Self {
        Self {
            transport: get_default_middleware(USER_AGENT_STRING),
            cache: MemoryCache::default(),
            config: InventoryConfig::default(),
        }
    }
}

impl<T, C> InventoryLoaderBuilder<T, C>
where
    T: Transport,
    C: CacheStore,
{
    /// Replaces every setting with those in `config`. The cache and transport are kept, so
    /// `config.cache_capacity` is not applied here; use
    /// [`InventoryLoader::from_config`] or give the builder a
    /// [`MemoryCache::with_capacity`] cache.
    pub fn config(mut self, config: InventoryConfig) -> Self {
        self.config = config;
        self
    }
    
    /// The transport used to fetch inventories. Configure timeouts and retries on the
    /// transport.
    pub fn transport<U: Transport>(self, transport: U) -> InventoryLoaderBuilder<U, C> {
        InventoryLoaderBuilder {
            transport,
            cache: self.cache,
            config: self.config,
        }
    }
    
    /// The store inventories are cached in. Useful for sharing a cache between loaders.
    pub fn cache<D: CacheStore>(self, cache: D) -> InventoryLoaderBuilder<T, D> {
        InventoryLoaderBuilder {
            transport: self.transport,
            cache,
            config: self.config,
        }
    }
    
    /// Number of minutes to cache an inventory. Defaults to 60.
    pub fn cache_time(mut self, minutes: Minutes) -> Self {
        self.config.cache_time = minutes;
        self
    }
    
    /// The tag every cached inventory is stored under. Defaults to `"steam.inventory"`.
    pub fn cache_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.cache_tag = tag.into();
        self
    }
    
    /// The language for item descriptions.
    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }
    
    /// Whether untradable descriptions are included when parsing descriptions. Defaults to
    /// `false`.
    pub fn include_untradable(mut self, include_untradable: bool) -> Self {
        self.config.include_untradable = include_untradable;
        self
    }
    
    /// The host inventories are fetched from. Defaults to `https://steamcommunity.com`.
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.config.hostname = hostname.into();
        self
    }
    
    /// Builds the [`InventoryLoader`].
    pub fn build(self) -> InventoryLoader<T, C> {
        let config = self.config;
        
        InventoryLoader {
            fetcher: InventoryFetcher::new(self.transport, config.hostname),
            cache: InventoryCache::new(self.cache, config.cache_tag, config.cache_time),
            language: config.language,
            include_untradable: config.include_untradable,
        }
    }
}
