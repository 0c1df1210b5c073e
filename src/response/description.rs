use crate::types::{AppId, ClassId, InstanceId, ClassInstance};
use crate::serialize;
use serde::{Serialize, Deserialize};

/// Contains details about an item including names and descriptions. Shared by every
/// [`Asset`][super::Asset] with the same `classid` and `instanceid`.
///
/// All fields are optional since the inventory endpoint omits fields freely. Fields that are not
/// recognized are kept in `extra`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Description {
    /// The item's app ID.
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appid: Option<AppId>,
    /// The ID for this description.
    #[serde(default, deserialize_with = "serialize::string_or_number")]
    #[serde(serialize_with = "serialize::as_string")]
    pub classid: ClassId,
    /// The specific instance ID for this description.
    #[serde(default, deserialize_with = "serialize::string_or_number")]
    #[serde(serialize_with = "serialize::as_string")]
    pub instanceid: InstanceId,
    /// The name of the item. Some apps prefix the name with other details separated by `|`.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The name of the item on the Steam Community Market.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_name: Option<String>,
    /// The market hash name. This is used to link to the item on the Steam Community Market.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_hash_name: Option<String>,
    /// The item's type. This is displayed underneath the name of the game in inventories.
    #[serde(rename = "type")]
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The URL to the icon for the item.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// The URL to the large icon for the item.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url_large: Option<String>,
    /// The color of the item's name as a hex string without the leading `#` e.g. `"D2D2D2"`.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_color: Option<String>,
    /// The background color for the item.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Whether this item can be traded or not.
    #[serde(default, deserialize_with = "serialize::option_bool_ish")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tradable: Option<bool>,
    /// Whether this item is marketable or not.
    #[serde(default, deserialize_with = "serialize::option_bool_ish")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketable: Option<bool>,
    /// Whether this item is a commodity item on the Steam Community Market.
    #[serde(default, deserialize_with = "serialize::option_bool_ish")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commodity: Option<bool>,
    /// How many days the item has left until it can be traded.
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_tradable_restriction: Option<u32>,
    /// How many days the item has left until it can be listed on the Steam Community Market.
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_marketable_restriction: Option<u32>,
    /// Description lines for this item.
    #[serde(default, deserialize_with = "serialize::option_hashmap_or_vec")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<Vec<DescriptionLine>>,
    /// Tags for this item.
    #[serde(default, deserialize_with = "serialize::option_hashmap_or_vec")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Actions for this item.
    #[serde(default, deserialize_with = "serialize::option_hashmap_or_vec")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Description {
    /// The `(classid, instanceid)` pair identifying this description.
    pub(crate) fn class_instance(&self) -> ClassInstance {
        (self.classid, self.instanceid)
    }
    
    /// Whether the item is tradable. A missing `tradable` field counts as not tradable.
    pub fn is_tradable(&self) -> bool {
        self.tradable.unwrap_or(false)
    }
    
    /// Copies every field present on `other` onto this description. Fields missing from `other`
    /// are left untouched.
    pub fn merge_from(&mut self, other: &Description) {
        fn take<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
            if source.is_some() {
                target.clone_from(source);
            }
        }
        
        take(&mut self.appid, &other.appid);
        self.classid = other.classid;
        self.instanceid = other.instanceid;
        take(&mut self.name, &other.name);
        take(&mut self.market_name, &other.market_name);
        take(&mut self.market_hash_name, &other.market_hash_name);
        take(&mut self.r#type, &other.r#type);
        take(&mut self.icon_url, &other.icon_url);
        take(&mut self.icon_url_large, &other.icon_url_large);
        take(&mut self.name_color, &other.name_color);
        take(&mut self.background_color, &other.background_color);
        take(&mut self.tradable, &other.tradable);
        take(&mut self.marketable, &other.marketable);
        take(&mut self.commodity, &other.commodity);
        take(&mut self.market_tradable_restriction, &other.market_tradable_restriction);
        take(&mut self.market_marketable_restriction, &other.market_marketable_restriction);
        take(&mut self.descriptions, &other.descriptions);
        take(&mut self.tags, &other.tags);
        take(&mut self.actions, &other.actions);
        
        for (key, value) in &other.extra {
            if !value.is_null() {
                self.extra.insert(key.clone(), value.clone());
            }
        }
    }
}

/// A color.
pub type Color = String;

/// A line of an item's description.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct DescriptionLine {
    /// The type of this line e.g. `"html"`.
    #[serde(rename = "type")]
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The description message.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    pub value: Option<String>,
    /// A string representing the color e.g. `"FFFFFF"`
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A tag.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct Tag {
    /// The category of this tag e.g. `"Exterior"`.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    pub category: Option<String>,
    /// The game's internal name of this tag e.g. `"WearCategory2"`.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_name: Option<String>,
    /// The localized category name of this tag e.g. `"Exterior"`.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_category_name: Option<String>,
    /// The localized name of this tag e.g. `"Field-Tested"`.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_tag_name: Option<String>,
    /// The color associated with this tag.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// An action.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Action {
    /// The name of the action.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    pub name: Option<String>,
    /// The link for the action e.g. an inspect link.
    #[serde(default, deserialize_with = "serialize::option_string_lossy")]
    pub link: Option<String>,
}
