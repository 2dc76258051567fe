//! Battery capacity and wireless-charging flags.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Category, SpecMap};

static MAH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*mAh").unwrap());

pub fn derive(map: &mut SpecMap) {
    let Some(fields) = map.get_mut(&Category::Battery) else {
        return;
    };

    // Capacity condenses to "<n>mAh" when a milliamp-hour figure appears
    // anywhere in the type or capacity text. Vendors put the number in
    // either field, so both feed the search.
    let type_text = fields.remove("Type");
    let capacity_text = fields.remove("Capacity");
    let combined = match (type_text, capacity_text) {
        (Some(t), Some(c)) => format!("{t} {c}"),
        (Some(t), None) => t,
        (None, Some(c)) => c,
        (None, None) => String::new(),
    };
    if !combined.is_empty() {
        let condensed = MAH_RE
            .captures(&combined)
            .map(|caps| format!("{}mAh", &caps[1]));
        fields.insert("Capacity".to_string(), condensed.unwrap_or(combined));
    }

    let wireless = fields
        .get("Charging")
        .is_some_and(|text| text.to_lowercase().contains("wireless"));
    fields.insert(
        "Wireless".to_string(),
        if wireless { "Yes" } else { "No" }.to_string(),
    );
}
