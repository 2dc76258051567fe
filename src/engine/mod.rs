pub mod anchored;
pub mod derive;
pub mod error;
pub mod heuristic;
pub mod labels;
pub mod locate;
pub mod rows;
pub mod sanitize;
pub mod schema;

use tracing::{debug, warn};

use crate::document::{SpecDocument, SpecMap};
pub use error::ExtractError;

/// One way of reading category/field pairs out of page markup.
trait ExtractionStrategy {
    fn name(&self) -> &'static str;
    fn run(&self, markup: &str) -> SpecMap;
}

/// Walks the section headings inside the spec container.
struct Anchored;

impl ExtractionStrategy for Anchored {
    fn name(&self) -> &'static str {
        "anchored"
    }

    fn run(&self, markup: &str) -> SpecMap {
        anchored::extract(markup)
    }
}

/// Classifies loose rows by label keywords, for pages that lost their
/// section structure.
struct Heuristic;

impl ExtractionStrategy for Heuristic {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn run(&self, markup: &str) -> SpecMap {
        heuristic::extract(markup)
    }
}

/// Three-pass pipeline: locate the spec table → extract raw rows →
/// derive domain fields.
pub fn extract(markup: &str) -> Result<SpecDocument, ExtractError> {
    locate::guard(markup)?;

    let map = match locate::container(markup) {
        Some(fragment) => run_strategy(&Anchored, fragment),
        None => {
            warn!("spec container not found, scanning the whole page");
            run_strategy(&Heuristic, markup)
        }
    };

    if map.is_empty() {
        return Err(ExtractError::NoDataRecognized);
    }

    Ok(SpecDocument::new(derive::apply(map)))
}

fn run_strategy(strategy: &dyn ExtractionStrategy, markup: &str) -> SpecMap {
    let map = strategy.run(markup);
    debug!(
        strategy = strategy.name(),
        categories = map.len(),
        fields = map.values().map(|fields| fields.len()).sum::<usize>(),
        "extraction pass done"
    );
    map
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Category;

    fn load(fixture: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", fixture)).unwrap()
    }

    #[test]
    fn flagship_page_covers_the_known_categories() {
        let doc = extract(&load("flagship")).unwrap();
        let got: Vec<Category> = doc.categories().map(|(category, _)| category).collect();
        assert_eq!(
            got,
            vec![
                Category::Display,
                Category::Performance,
                Category::Camera,
                Category::Battery,
                Category::Build,
                Category::Network,
                Category::Software,
            ]
        );
    }

    #[test]
    fn flagship_battery_fields() {
        let doc = extract(&load("flagship")).unwrap();
        assert_eq!(doc.field(Category::Battery, "Capacity"), Some("5000mAh"));
        assert_eq!(doc.field(Category::Battery, "Wireless"), Some("Yes"));
        assert_eq!(
            doc.field(Category::Battery, "Charging"),
            Some("100W wired, 50W wireless, 10W reverse wireless")
        );
        // The raw Type row is consumed by the capacity derivation.
        let keys: Vec<&str> = doc
            .category(Category::Battery)
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["Capacity", "Charging", "Wireless"]);
    }

    #[test]
    fn flagship_memory_split() {
        let doc = extract(&load("flagship")).unwrap();
        assert_eq!(doc.field(Category::Performance, "RAM"), Some("12GB"));
        assert_eq!(
            doc.field(Category::Performance, "Storage"),
            Some("256GB/512GB")
        );
        assert_eq!(doc.field(Category::Performance, "Expandable"), Some("No"));
        assert_eq!(
            doc.field(Category::Performance, "Processor"),
            Some("Qualcomm SM8650 Snapdragon 8 Gen 3 (4 nm)")
        );
    }

    #[test]
    fn flagship_network_summary() {
        let doc = extract(&load("flagship")).unwrap();
        let five_g = doc.field(Category::Network, "5G").unwrap();
        assert!(five_g.starts_with("Yes ("));
        assert!(five_g.ends_with("...)"));
        assert_eq!(doc.field(Category::Network, "Dual SIM"), Some("Yes"));
        assert_eq!(
            doc.field(Category::Network, "4G"),
            Some("1, 2, 3, 4, 5, 7, 8, 12, 20, 28, 38, 40, 41, 66")
        );
    }

    #[test]
    fn flagship_build_and_water_rating() {
        let doc = extract(&load("flagship")).unwrap();
        assert_eq!(doc.field(Category::Build, "Water Resistance"), Some("IP68"));
        assert_eq!(
            doc.field(Category::Build, "SIM"),
            Some("Dual SIM (Nano-SIM, dual stand-by)")
        );
        let keys: Vec<&str> = doc.category(Category::Build).unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "Colors",
                "Dimensions",
                "Materials",
                "Models",
                "Price",
                "SIM",
                "Water Resistance",
                "Weight",
            ]
        );
    }

    #[test]
    fn flagship_software_fields() {
        let doc = extract(&load("flagship")).unwrap();
        assert_eq!(
            doc.field(Category::Software, "OS"),
            Some("Android 15, up to 4 major upgrades")
        );
        assert_eq!(
            doc.field(Category::Software, "Updates"),
            Some(derive::UPDATES_NOTE)
        );
        assert_eq!(
            doc.field(Category::Software, "Announced"),
            Some("2025, March 12")
        );
        // OS leaves the performance bucket once relocated.
        assert_eq!(doc.field(Category::Performance, "OS"), None);
    }

    #[test]
    fn flagship_camera_lens_rows() {
        let doc = extract(&load("flagship")).unwrap();
        let camera = doc.category(Category::Camera).unwrap();
        let keys: Vec<&str> = camera.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Features", "Front", "Main", "Video"]);
        // Line breaks inside the lens cell join into one value.
        assert!(camera["Main"].contains("OIS, 48 MP"));
        assert_eq!(camera["Front"], "32 MP, f/2.2, 22mm (wide)");
    }

    #[test]
    fn audio_and_radio_rows_stay_out() {
        let doc = extract(&load("flagship")).unwrap();
        for (_, fields) in doc.categories() {
            assert!(!fields.contains_key("Loudspeaker"));
            assert!(!fields.contains_key("Bluetooth"));
            assert!(!fields.contains_key("WLAN"));
        }
    }

    #[test]
    fn repeated_runs_serialize_identically() {
        let page = load("flagship");
        let first = serde_json::to_string(&extract(&page).unwrap()).unwrap();
        let second = serde_json::to_string(&extract(&page).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn degraded_page_uses_the_keyword_scan() {
        let doc = extract(&load("degraded")).unwrap();
        assert_eq!(doc.field(Category::Battery, "Capacity"), Some("4800mAh"));
        assert_eq!(doc.field(Category::Performance, "Storage"), Some("128GB"));
        assert_eq!(doc.field(Category::Performance, "RAM"), Some("8GB"));
        assert_eq!(doc.field(Category::Network, "Dual SIM"), Some("Yes"));
        // Rows before the first recognized label never land anywhere.
        for (_, fields) in doc.categories() {
            assert!(!fields.contains_key("Quick links"));
        }
    }

    #[test]
    fn no_category_arrives_empty() {
        for fixture in ["flagship", "degraded"] {
            let doc = extract(&load(fixture)).unwrap();
            for (category, fields) in doc.categories() {
                assert!(
                    !fields.is_empty(),
                    "{fixture}: {} came out empty",
                    category.name()
                );
            }
        }
    }

    #[test]
    fn short_page_is_rejected() {
        let err = extract(&load("stub")).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::InvalidInput {
                min: locate::MIN_INPUT_LEN,
                ..
            }
        ));
    }

    #[test]
    fn page_without_rows_is_rejected() {
        let filler = "lorem ipsum dolor sit amet ".repeat(60);
        let page = format!("<html><body><p>{filler}</p></body></html>");
        assert_eq!(extract(&page).unwrap_err(), ExtractError::NoDataRecognized);

        let empty_container = format!(r#"<div id="specs-list"><p>{filler}</p></div>"#);
        assert_eq!(
            extract(&empty_container).unwrap_err(),
            ExtractError::NoDataRecognized
        );
    }
}
