//! Missing-name completion.
//!
//! Many Beijing elements carry only `name:zh`. After key splitting that tag
//! has key `zh`, and its value is copied into a `name` tag when the element
//! has none.

use std::collections::BTreeMap;

use osm_model::{DEFAULT_TAG_TYPE, TagRecord};

pub const NAME_KEY: &str = "name";
pub const CHINESE_NAME_KEY: &str = "zh";

/// The `name` tag to add for one element's tags, if any is missing.
pub fn missing_name_tag(tags: &[TagRecord]) -> Option<TagRecord> {
    name_for_group(tags.iter())
}

fn name_for_group<'a, I>(tags: I) -> Option<TagRecord>
where
    I: Iterator<Item = &'a TagRecord> + Clone,
{
    if tags.clone().any(|tag| tag.key == NAME_KEY) {
        return None;
    }
    let chinese = tags.into_iter().find(|tag| tag.key == CHINESE_NAME_KEY)?;
    Some(TagRecord {
        id: chinese.id.clone(),
        key: NAME_KEY.to_string(),
        value: chinese.value.clone(),
        tag_type: DEFAULT_TAG_TYPE.to_string(),
    })
}

/// Append a `name` tag for every id in `tags` that lacks one but has `zh`.
///
/// Tags may belong to many ids; added rows go to the end, ordered by id.
/// Returns the number of rows added.
pub fn fill_missing_names(tags: &mut Vec<TagRecord>) -> usize {
    let mut by_id: BTreeMap<&str, Vec<&TagRecord>> = BTreeMap::new();
    for tag in tags.iter() {
        by_id.entry(tag.id.as_str()).or_default().push(tag);
    }
    let added: Vec<TagRecord> = by_id
        .values()
        .filter_map(|group| name_for_group(group.iter().copied()))
        .collect();
    let count = added.len();
    tags.extend(added);
    count
}
