use super::Tags;
use super::helpers::{parse_tags, display_name, description_text, is_stattrak};
use crate::types::{AppId, ClassId, InstanceId};
use crate::response::Description;
use crate::serialize;
use serde::Serialize;

/// A [`Description`] with its tags decoded into named attributes.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ParsedItem {
    pub appid: Option<AppId>,
    #[serde(serialize_with = "serialize::as_string")]
    pub classid: ClassId,
    #[serde(serialize_with = "serialize::as_string")]
    pub instanceid: InstanceId,
    /// The segment of the item's name after the last `|`.
    pub name: String,
    pub market_name: Option<String>,
    pub weapon: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub quality: Option<String>,
    pub exterior: Option<String>,
    pub collection: Option<String>,
    /// Whether the `Category` tag marks this as a StatTrak™ item.
    pub stattrack: bool,
    pub icon_url: Option<String>,
    pub icon_url_large: Option<String>,
    /// The item's flavor text.
    pub description: String,
    /// The color of the item's name, prefixed with `#`.
    pub name_color: String,
}

impl From<&Description> for ParsedItem {
    fn from(description: &Description) -> Self {
        let mut tags = description.tags
            .as_deref()
            .map(parse_tags)
            .unwrap_or_default();
        let stattrack = tags
            .get("Category")
            .is_some_and(|category| is_stattrak(category));
        let mut take = |category: &str| tags.remove(category);
        
        Self {
            appid: description.appid,
            classid: description.classid,
            instanceid: description.instanceid,
            name: display_name(description.name.as_deref().unwrap_or_default()),
            market_name: description.market_name.clone(),
            weapon: take("Weapon"),
            r#type: take("Type"),
            quality: take("Quality"),
            exterior: take("Exterior"),
            collection: take("Collection"),
            stattrack,
            icon_url: description.icon_url.clone(),
            icon_url_large: description.icon_url_large.clone(),
            description: description.descriptions
                .as_deref()
                .map(description_text)
                .unwrap_or_default(),
            name_color: format!("#{}", description.name_color.as_deref().unwrap_or_default()),
        }
    }
}

/// Parses descriptions into [`ParsedItem`]s. Unless `include_untradable` is set, descriptions
/// that are not tradable or have an instance ID of `0` are skipped.
pub fn parse_descriptions(
    descriptions: &[Description],
    include_untradable: bool,
) -> Vec<ParsedItem> {
    descriptions
        .iter()
        .filter(|description| {
            include_untradable || (description.is_tradable() && description.instanceid != 0)
        })
        .map(ParsedItem::from)
        .collect()
}
