use tracing::debug;

use crate::document::{Category, SpecMap};
use crate::engine::{labels, rows, schema};

/// Secondary strategy for pages whose container is missing or mangled:
/// one forward pass over the whole input, no anchor bounding. The only
/// state is the current category, advanced whenever a row label hits a
/// category keyword set; rows that match nothing stay filed under the
/// last-seen category, and rows before the first hit are dropped. Best
/// effort by contract: it may misfile, it never fails.
pub fn extract(markup: &str) -> SpecMap {
    let mut map = SpecMap::new();
    let mut current: Option<Category> = None;

    for pair in rows::scan(markup) {
        if let Some(category) = schema::keyword_category(&pair.label) {
            current = Some(category);
        }
        let Some(category) = current else {
            debug!("no category context yet, dropping row '{}'", pair.label);
            continue;
        };
        let label = labels::normalize_fallback(&pair.label, category);
        map.entry(category).or_default().insert(label, pair.value);
    }

    map
}
