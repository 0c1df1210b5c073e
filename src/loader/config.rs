use crate::cache::{DEFAULT_CACHE_TAG, DEFAULT_CACHE_TIME, DEFAULT_CAPACITY};
use crate::enums::Language;
use crate::fetcher::HOSTNAME;
use crate::types::Minutes;
use serde::{Serialize, Deserialize};

/// Settings for an [`InventoryLoader`][super::InventoryLoader], read once when the loader is
/// built. Every field is optional when deserializing.
/// 
/// # Examples
/// ```
/// use steam_inventory_cache::{InventoryConfig, InventoryLoader};
/// 
/// let config: InventoryConfig = serde_json::from_str(r#"{
///     "cache_time": 15,
///     "language": "german"
/// }"#).unwrap();
/// let loader = InventoryLoader::from_config(config);
/// 
/// assert_eq!(loader.cache().ttl_minutes(), 15);
/// assert_eq!(loader.cache().tag(), "steam.inventory");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Number of minutes to cache an inventory.
    pub cache_time: Minutes,
    /// The tag every cached inventory is stored under.
    pub cache_tag: String,
    /// The language for item descriptions.
    pub language: Language,
    /// Whether untradable descriptions are included when parsing descriptions.
    pub include_untradable: bool,
    /// The host inventories are fetched from.
    pub hostname: String,
    /// The number of inventories the in-memory cache holds per tag. Only applies when the cache
    /// is created from this config, as [`InventoryLoader::from_config`][super::InventoryLoader::from_config]
    /// does. A cache given to a builder keeps its own capacity.
    pub cache_capacity: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            cache_time: DEFAULT_CACHE_TIME,
            cache_tag: DEFAULT_CACHE_TAG.into(),
            language: Language::English,
            include_untradable: false,
            hostname: HOSTNAME.into(),
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn empty_config_uses_defaults() {
        let config: InventoryConfig = serde_json::from_str("{}").unwrap();
        
        assert_eq!(config, InventoryConfig::default());
        assert_eq!(config.cache_time, 60);
        assert_eq!(config.cache_tag, "steam.inventory");
        assert_eq!(config.language, Language::English);
        assert!(!config.include_untradable);
    }
    
    #[test]
    fn rejects_unknown_language() {
        assert!(serde_json::from_str::<InventoryConfig>(r#"{"language":"elvish"}"#).is_err());
    }
}
