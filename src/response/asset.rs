use crate::types::{AppId, ContextId, AssetId, ClassId, InstanceId, Amount, ClassInstance};
use crate::serialize;
use serde::{Serialize, Deserialize};

/// An item in an inventory. Its details are found in the [`Description`][super::Description]
/// with the same `classid` and `instanceid`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Asset {
    /// The app ID e.g. 730 for Counter-Strike 2.
    #[serde(default, deserialize_with = "serialize::string_or_number")]
    pub appid: AppId,
    /// The context ID.
    #[serde(default, deserialize_with = "serialize::string_or_number")]
    #[serde(serialize_with = "serialize::as_string")]
    pub contextid: ContextId,
    /// The unique asset ID. This value is unique to the item's `appid` and `contextid`.
    #[serde(default, deserialize_with = "serialize::string_or_number")]
    #[serde(serialize_with = "serialize::as_string")]
    pub assetid: AssetId,
    /// The ID of the description.
    #[serde(default, deserialize_with = "serialize::string_or_number")]
    #[serde(serialize_with = "serialize::as_string")]
    pub classid: ClassId,
    /// The specific instance ID of the description belonging to the class ID.
    #[serde(default, deserialize_with = "serialize::string_or_number")]
    #[serde(serialize_with = "serialize::as_string")]
    pub instanceid: InstanceId,
    /// The amount. If this item is not stackable the amount will be `1`.
    #[serde(default, deserialize_with = "serialize::string_or_number")]
    #[serde(serialize_with = "serialize::as_string")]
    pub amount: Amount,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Asset {
    /// The `(classid, instanceid)` pair of the description for this asset.
    pub(crate) fn class_instance(&self) -> ClassInstance {
        (self.classid, self.instanceid)
    }
}
