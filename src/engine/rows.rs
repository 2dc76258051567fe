use std::sync::LazyLock;

use regex::Regex;

use crate::engine::sanitize;

static ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<td[^>]*class=["']ttl["'][^>]*>(.*?)</td>\s*<td[^>]*class=["']nfo["'][^>]*>(.*?)</td>"#,
    )
    .unwrap()
});

/// One label/value row as found in the markup, already sanitized.
/// Duplicates are allowed at this stage.
#[derive(Debug, Clone)]
pub struct RawPair {
    pub label: String,
    pub value: String,
}

/// Collect ordered label/value rows from a fragment. Rows with an empty
/// label or value after cleanup are dropped; broken trailing rows simply
/// fail to match. Never errors.
pub fn scan(fragment: &str) -> Vec<RawPair> {
    ROW_RE
        .captures_iter(fragment)
        .filter_map(|caps| {
            let label = sanitize::clean(&caps[1]);
            let value = sanitize::clean(&caps[2]);
            if label.is_empty() || value.is_empty() {
                return None;
            }
            Some(RawPair { label, value })
        })
        .collect()
}
