use super::{Asset, Description};
use crate::types::AssetId;
use crate::serialize;
use serde::{Serialize, Deserialize};

/// The body of an inventory response. Missing or `null` fields are filled with defaults so a
/// payload always decodes as long as its fields have the expected shapes.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct InventoryResponse {
    /// Whether the request succeeded. Sent as `1`/`0` or a boolean.
    #[serde(default, deserialize_with = "serialize::bool_ish")]
    pub success: bool,
    /// The items in the inventory, in the order they were sent.
    #[serde(default, deserialize_with = "serialize::hashmap_or_vec")]
    pub assets: Vec<Asset>,
    /// The descriptions for the items, in the order they were sent.
    #[serde(default, deserialize_with = "serialize::hashmap_or_vec")]
    pub descriptions: Vec<Description>,
    /// The total number of items in the inventory.
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_inventory_count: Option<u32>,
    /// Whether there are more items to fetch.
    #[serde(default, deserialize_with = "serialize::bool_ish")]
    pub more_items: bool,
    /// The last asset ID in this page, when more items are available.
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_assetid: Option<AssetId>,
    /// An error message. Usually only present when `success` is false.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl InventoryResponse {
    /// Whether the response contains no items and no descriptions.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty() && self.descriptions.is_empty()
    }
}
