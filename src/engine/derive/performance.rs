//! RAM/storage split and expandable-storage default.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Category, SpecMap};

static RAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*GB\s+RAM").unwrap());

// Matches every gigabyte token; the optional trailing group marks the
// ones that belong to RAM so storage collection can drop them.
static GB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*GB(\s*RAM)?").unwrap());

pub fn derive(map: &mut SpecMap) {
    let Some(fields) = map.get_mut(&Category::Performance) else {
        return;
    };

    if let Some(raw) = fields.get("Storage").cloned() {
        if let Some(caps) = RAM_RE.captures(&raw) {
            fields.insert("RAM".to_string(), format!("{}GB", &caps[1]));
        }

        let mut variants: Vec<String> = Vec::new();
        for caps in GB_RE.captures_iter(&raw) {
            if caps.get(2).is_some() {
                continue;
            }
            let token = format!("{}GB", &caps[1]);
            if !variants.contains(&token) {
                variants.push(token);
            }
        }
        if !variants.is_empty() {
            fields.insert("Storage".to_string(), variants.join("/"));
        }
    }

    let negated = fields
        .get("Expandable")
        .is_none_or(|text| text.trim().eq_ignore_ascii_case("no"));
    if negated {
        fields.insert("Expandable".to_string(), "No".to_string());
    }
}
