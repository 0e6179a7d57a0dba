use crate::model::champion::Champion;

use super::dictionary::TagDictionary;

/// Sentinel tag meaning "no tag filter".
pub const ALL_TAG: &str = "All";

/// The tag filter bar: the reset entry plus the closed class vocabulary.
pub const FILTER_TAGS: [&str; 7] = [
    ALL_TAG, "Assassin", "Fighter", "Mage", "Marksman", "Support", "Tank",
];

/// Case-insensitive substring match on name, title, or any translated tag
/// label. The query is trimmed; an empty query means "no filtering". Output
/// order equals catalog order.
pub fn filter_by_text<'a>(
    catalog: &'a [Champion],
    dictionary: &TagDictionary,
    query: &str,
) -> Vec<&'a Champion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.iter().collect();
    }

    catalog
        .iter()
        .filter(|champ| {
            champ.name.to_lowercase().contains(&needle)
                || champ.title.to_lowercase().contains(&needle)
                || champ
                    .tags
                    .iter()
                    .any(|tag| dictionary.label(tag).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Exact membership test against the untranslated tag set. `ALL_TAG`
/// short-circuits to the full catalog. Output order equals catalog order.
pub fn filter_by_tag<'a>(catalog: &'a [Champion], tag: &str) -> Vec<&'a Champion> {
    if tag == ALL_TAG {
        return catalog.iter().collect();
    }

    catalog
        .iter()
        .filter(|champ| champ.tags.iter().any(|t| t == tag))
        .collect()
}
