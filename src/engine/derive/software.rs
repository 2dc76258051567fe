//! OS relocation and the update-policy placeholder.

use crate::document::{Category, SpecMap};

/// Update commitments rarely appear on spec pages, so every document
/// carries the same advisory note.
pub const UPDATES_NOTE: &str = "Check with the manufacturer for the latest update policy";

pub fn derive(map: &mut SpecMap) {
    // The OS line is published under the platform section, which lands
    // in performance. It belongs with the software facts.
    let os = map
        .get_mut(&Category::Performance)
        .and_then(|fields| fields.remove("OS"));

    let fields = map.entry(Category::Software).or_default();
    if let Some(os) = os {
        fields.insert("OS".to_string(), os);
    }
    fields.insert("Updates".to_string(), UPDATES_NOTE.to_string());
}
