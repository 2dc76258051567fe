//! Category-scoped semantic derivations applied after raw extraction.
//! Each module owns one output category; a derivation that finds no
//! pattern leaves raw text in place or omits its field, never errors.

mod battery;
mod build;
mod network;
mod performance;
mod software;

pub use software::UPDATES_NOTE;

use crate::document::SpecMap;

/// Run every derivation, then drop categories left without fields.
pub fn apply(mut map: SpecMap) -> SpecMap {
    let haystack = full_text(&map);

    battery::derive(&mut map);
    build::derive(&mut map, &haystack);
    network::derive(&mut map);
    performance::derive(&mut map);
    software::derive(&mut map);

    map.retain(|_, fields| !fields.is_empty());
    map
}

/// All extracted values in one searchable string, taken before any
/// derivation rewrites them.
fn full_text(map: &SpecMap) -> String {
    let mut text = String::new();
    for fields in map.values() {
        for value in fields.values() {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(value);
        }
    }
    text
}

#[cfg(test)]
pub(super) fn bucket(entries: &[(&str, &str)]) -> std::collections::BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Category;

    #[test]
    fn empty_categories_are_pruned() {
        let mut map = SpecMap::new();
        map.insert(Category::Display, bucket(&[("Type", "AMOLED")]));
        map.insert(Category::Camera, bucket(&[]));
        let out = apply(map);
        assert!(out.contains_key(&Category::Display));
        assert!(!out.contains_key(&Category::Camera));
        for fields in out.values() {
            assert!(!fields.is_empty());
        }
    }

    #[test]
    fn water_rating_is_found_across_categories() {
        // The IP token lives in the display protection text, not in the
        // build bucket itself.
        let mut map = SpecMap::new();
        map.insert(
            Category::Display,
            bucket(&[("Protection", "Gorilla Glass Victus, IP68 rated body")]),
        );
        map.insert(Category::Build, bucket(&[("Weight", "187 g")]));
        let out = apply(map);
        assert_eq!(out[&Category::Build]["Water Resistance"], "IP68");
    }
}
