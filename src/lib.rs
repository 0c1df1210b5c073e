//! Loads Steam community inventories, caches them per user, and merges assets with their
//! descriptions.
//!
//! # Examples
//! ```no_run
//! use steam_inventory_cache::InventoryLoader;
//!
//! # async fn run() -> Result<(), steam_inventory_cache::Error> {
//! let loader = InventoryLoader::builder()
//!     .cache_time(30)
//!     .build();
//! let inventory = loader.load("STEAM_0:1:5").await?;
//!
//! if let Some(items) = inventory.inventory_with_descriptions(2) {
//!     for item in items {
//!         println!("{} {:?}", item.asset.assetid, item.tags.get("Exterior"));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod identifier;
mod fetcher;
mod helpers;
mod serialize;
mod transport;
pub mod cache;
pub mod enums;
pub mod inventory;
pub mod loader;
pub mod request;
pub mod response;
pub mod types;

pub use error::{Error, ErrorKind, FetchError, IdentifierError};
pub use identifier::{normalize, Identifier};
pub use fetcher::{InventoryFetcher, FetchedInventory, HOSTNAME};
pub use helpers::{get_default_middleware, USER_AGENT_STRING};
pub use transport::{Transport, HttpResponse};
pub use cache::{CacheStore, InventoryCache, MemoryCache};
pub use enums::Language;
pub use inventory::{LoadedInventory, LoadSource, LoadState, ParsedItem, MergedItem, Tags};
pub use loader::{InventoryLoader, InventoryLoaderBuilder, InventoryConfig};
pub use steamid_ng::SteamID;
