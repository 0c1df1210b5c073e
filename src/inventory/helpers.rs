use super::Tags;
use crate::response::{DescriptionLine, Tag};

/// The description line holding an item's flavor text.
const DESCRIPTION_TEXT_INDEX: usize = 2;

/// Builds a map of tag categories to tag names. When a category appears more than once the last
/// tag wins. Tags without a category are skipped.
pub fn parse_tags(tags: &[Tag]) -> Tags {
    tags
        .iter()
        .filter_map(|tag| {
            let category = tag.category.clone()?;
            let name = tag.localized_tag_name
                .as_ref()
                .or(tag.internal_name.as_ref())
                .cloned()
                .unwrap_or_default();
            
            Some((category, name))
        })
        .collect()
}

/// Gets the display name from an item name e.g. `"Case Hardened"` from
/// `"StatTrak™ AK-47 | Case Hardened"`.
pub fn display_name(name: &str) -> String {
    name
        .rsplit('|')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Gets the flavor text of an item. This is always the third description line, or an empty
/// string when there are fewer lines.
pub fn description_text(lines: &[DescriptionLine]) -> String {
    lines
        .get(DESCRIPTION_TEXT_INDEX)
        .and_then(|line| line.value.as_deref())
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Whether a `Category` tag value marks a StatTrak™ item.
pub fn is_stattrak(category: &str) -> bool {
    category.to_lowercase().contains("stattrak")
}
