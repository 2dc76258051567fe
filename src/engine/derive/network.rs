//! 5G summary and dual-SIM flags for the network category.

use crate::document::{Category, SpecMap};

// Band lists run long; the summary keeps the leading slice only.
const BAND_PREVIEW_CHARS: usize = 50;

pub fn derive(map: &mut SpecMap) {
    let sim = map
        .get(&Category::Build)
        .and_then(|fields| fields.get("SIM"))
        .cloned();

    let Some(fields) = map.get_mut(&Category::Network) else {
        return;
    };

    let summary = match fields.get("5G") {
        Some(bands) => {
            let preview: String = bands.chars().take(BAND_PREVIEW_CHARS).collect();
            format!("Yes ({preview}...)")
        }
        None => "No".to_string(),
    };
    fields.insert("5G".to_string(), summary);

    if let Some(sim) = sim {
        let flag = if sim.to_lowercase().contains("dual") {
            "Yes".to_string()
        } else {
            sim
        };
        fields.insert("Dual SIM".to_string(), flag);
    }
}
