//! Views over a loaded inventory.

mod helpers;
mod merged_item;
mod parsed_item;

pub use helpers::{parse_tags, display_name, description_text, is_stattrak};
pub use merged_item::{MergedItem, merge_descriptions};
pub use parsed_item::{ParsedItem, parse_descriptions};

use crate::identifier::Identifier;
use crate::response::{Asset, InventoryResponse};
use crate::types::{CachedInventory, ContextId};
use std::collections::BTreeMap;

/// A map of tag categories to tag names e.g. `"Exterior"` => `"Field-Tested"`. Categories are
/// kept sorted so iteration and serialized output have a stable order.
pub type Tags = BTreeMap<String, String>;

/// Where a [`LoadedInventory`] came from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoadSource {
    /// The inventory was found in the cache.
    Cache,
    /// The inventory was fetched.
    Network,
}

/// Whether a [`LoadedInventory`] holds any data.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoadState {
    /// Nothing was loaded. The endpoint responded with something other than an inventory.
    NotLoaded,
    /// An inventory was loaded but it has no items or descriptions.
    Empty,
    /// An inventory with items was loaded.
    Loaded,
}

/// An immutable snapshot of a user's inventory, returned by
/// [`InventoryLoader::load`][crate::InventoryLoader::load]. Every accessor computes its view
/// from the snapshot on each call; nothing is cached on the handle.
/// 
/// The payload is shared, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct LoadedInventory {
    identifier: Identifier,
    payload: Option<CachedInventory>,
    source: LoadSource,
    include_untradable: bool,
}

impl LoadedInventory {
    pub(crate) fn new(
        identifier: Identifier,
        payload: CachedInventory,
        source: LoadSource,
        include_untradable: bool,
    ) -> Self {
        Self {
            identifier,
            payload: Some(payload),
            source,
            include_untradable,
        }
    }
    
    pub(crate) fn not_loaded(
        identifier: Identifier,
        include_untradable: bool,
    ) -> Self {
        Self {
            identifier,
            payload: None,
            source: LoadSource::Network,
            include_untradable,
        }
    }
    
    /// The normalized identifier of the inventory's owner.
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }
    
    /// Where the inventory came from.
    pub fn source(&self) -> LoadSource {
        self.source
    }
    
    /// The raw response, if one was loaded.
    pub fn payload(&self) -> Option<&InventoryResponse> {
        self.payload.as_deref()
    }
    
    /// Whether this snapshot holds any data, distinguishing "nothing loaded" from "loaded but
    /// empty".
    pub fn state(&self) -> LoadState {
        match self.payload() {
            None => LoadState::NotLoaded,
            Some(payload) if payload.is_empty() => LoadState::Empty,
            Some(_) => LoadState::Loaded,
        }
    }
    
    /// Whether a response was loaded.
    pub fn is_loaded(&self) -> bool {
        self.payload.is_some()
    }
    
    /// The assets exactly as they were received. `None` if nothing was loaded.
    pub fn inventory(&self) -> Option<&[Asset]> {
        self.payload().map(|payload| payload.assets.as_slice())
    }
    
    /// The parsed descriptions. Untradable descriptions are included according to the loader's
    /// configuration.
    pub fn descriptions(&self) -> Vec<ParsedItem> {
        self.descriptions_with(self.include_untradable)
    }
    
    /// The parsed descriptions, overriding whether untradable descriptions are included.
    pub fn descriptions_with(&self, include_untradable: bool) -> Vec<ParsedItem> {
        self.payload()
            .map(|payload| parse_descriptions(&payload.descriptions, include_untradable))
            .unwrap_or_default()
    }
    
    /// The assets combined with their descriptions. `None` if nothing was loaded or the response
    /// was not successful. Every item is given the `contextid` passed in.
    pub fn inventory_with_descriptions(&self, contextid: ContextId) -> Option<Vec<MergedItem>> {
        let payload = self.payload()?;
        
        if !payload.success {
            return None;
        }
        
        Some(merge_descriptions(&payload.assets, &payload.descriptions, contextid))
    }
}
