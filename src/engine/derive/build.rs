//! Water-resistance rating for the build category.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Category, SpecMap};

// Ingress-protection tokens read "IP" plus exactly two digits (IP53,
// IP67, IP68). Longer digit runs are something else.
static IP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bIP\d{2}\b").unwrap());

pub fn derive(map: &mut SpecMap, haystack: &str) {
    let Some(fields) = map.get_mut(&Category::Build) else {
        return;
    };

    // The rating can be buried in any category's text (display
    // protection, misc notes), so the whole document is searched first.
    let rating = IP_RE.find(haystack).map(|m| m.as_str().to_string());
    let rating = rating.or_else(|| {
        fields
            .get("Materials")
            .filter(|text| text.to_lowercase().contains("water"))
            .map(|_| "Water resistant".to_string())
    });

    if let Some(rating) = rating {
        fields.insert("Water Resistance".to_string(), rating);
    }
}
