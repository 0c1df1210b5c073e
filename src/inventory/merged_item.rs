use super::Tags;
use super::helpers::parse_tags;
use crate::types::ContextId;
use crate::response::{Asset, Description};
use serde::Serialize;
use serde_json::{Map, Value};

/// An [`Asset`] combined with its matching [`Description`].
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct MergedItem {
    /// The asset. Its `contextid` is the one given when merging, not the one in the response.
    pub asset: Asset,
    /// The merged description. `None` when no description matched the asset.
    pub description: Option<Description>,
    /// The description's tags as a map of category to tag name.
    pub tags: Tags,
}

impl MergedItem {
    /// Converts this item into a single flat JSON object: the asset's fields overwritten by the
    /// description's fields, with `tags` replaced by the parsed tag map.
    pub fn to_json(&self) -> Value {
        let mut object = into_object(&self.asset);
        
        if let Some(description) = &self.description {
            for (key, value) in into_object(description) {
                if !value.is_null() {
                    object.insert(key, value);
                }
            }
        }
        
        let tags = self.tags
            .iter()
            .map(|(category, name)| (category.clone(), Value::String(name.clone())))
            .collect::<Map<_, _>>();
        
        object.insert("tags".into(), Value::Object(tags));
        object.insert("contextid".into(), Value::String(self.asset.contextid.to_string()));
        
        Value::Object(object)
    }
}

fn into_object<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(object)) => object,
        _ => Map::new(),
    }
}

/// Combines each asset with every description sharing its `classid` and `instanceid`.
/// Descriptions are applied in order, so where more than one matches, fields from later
/// descriptions overwrite earlier ones.
/// 
/// Every asset is compared against every description. Inventories are small enough that this
/// is not a concern.
pub fn merge_descriptions(
    assets: &[Asset],
    descriptions: &[Description],
    contextid: ContextId,
) -> Vec<MergedItem> {
    assets
        .iter()
        .map(|asset| {
            let class_instance = asset.class_instance();
            let description = descriptions
                .iter()
                .filter(|description| description.class_instance() == class_instance)
                .fold(None, |merged: Option<Description>, description| {
                    let mut merged = merged.unwrap_or_default();
                    
                    merged.merge_from(description);
                    Some(merged)
                });
            let tags = description
                .as_ref()
                .and_then(|description| description.tags.as_deref())
                .map(parse_tags)
                .unwrap_or_default();
            
            MergedItem {
                asset: Asset {
                    contextid,
                    ..asset.clone()
                },
                description,
                tags,
            }
        })
        .collect()
}
