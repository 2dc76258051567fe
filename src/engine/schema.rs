//! Fixed vocabulary of the source pages: section anchors, label renames,
//! and the keyword sets the fallback path classifies with. Pure data, so
//! vocabulary growth never touches control flow.

use crate::document::Category;

/// A source-page section heading. Several anchors can feed one canonical
/// category (Platform and Memory both feed Performance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Display,
    Platform,
    Memory,
    MainCamera,
    SelfieCamera,
    Battery,
    Body,
    Misc,
    Network,
    Launch,
}

impl Anchor {
    pub const ALL: [Anchor; 10] = [
        Anchor::Display,
        Anchor::Platform,
        Anchor::Memory,
        Anchor::MainCamera,
        Anchor::SelfieCamera,
        Anchor::Battery,
        Anchor::Body,
        Anchor::Misc,
        Anchor::Network,
        Anchor::Launch,
    ];

    /// The heading text as it appears on the source pages.
    pub fn name(self) -> &'static str {
        match self {
            Anchor::Display => "Display",
            Anchor::Platform => "Platform",
            Anchor::Memory => "Memory",
            Anchor::MainCamera => "Main Camera",
            Anchor::SelfieCamera => "Selfie camera",
            Anchor::Battery => "Battery",
            Anchor::Body => "Body",
            Anchor::Misc => "Misc",
            Anchor::Network => "Network",
            Anchor::Launch => "Launch",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Anchor::Display => Category::Display,
            Anchor::Platform | Anchor::Memory => Category::Performance,
            Anchor::MainCamera | Anchor::SelfieCamera => Category::Camera,
            Anchor::Battery => Category::Battery,
            Anchor::Body | Anchor::Misc => Category::Build,
            Anchor::Network => Category::Network,
            Anchor::Launch => Category::Software,
        }
    }

    /// Match a sanitized section heading against the fixed anchor set.
    pub fn from_heading(text: &str) -> Option<Anchor> {
        let text = text.trim();
        Anchor::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(text))
    }
}

/// Raw label → canonical label renames, per category. Labels missing here
/// keep their own text; unknown data is preserved, not discarded.
const LABEL_MAP: &[(Category, &[(&str, &str)])] = &[
    (
        Category::Performance,
        &[
            ("Chipset", "Processor"),
            ("Internal", "Storage"),
            ("Card slot", "Expandable"),
        ],
    ),
    (
        Category::Network,
        &[
            ("Technology", "Network"),
            ("2G bands", "2G"),
            ("3G bands", "3G"),
            ("4G bands", "4G"),
            ("5G bands", "5G"),
        ],
    ),
    (Category::Build, &[("Build", "Materials")]),
];

pub fn rename(category: Category, raw: &str) -> Option<&'static str> {
    let (_, table) = LABEL_MAP.iter().find(|(c, _)| *c == category)?;
    table
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(raw))
        .map(|(_, to)| *to)
}

/// Lens-count descriptors used as row labels in the camera sections.
const LENS_WORDS: &[&str] = &["single", "dual", "triple", "quad", "penta"];

pub fn is_lens_descriptor(label: &str) -> bool {
    words(label).any(|w| LENS_WORDS.iter().any(|l| l.eq_ignore_ascii_case(w)))
}

/// Keyword sets for the fallback path, consulted in declaration order;
/// the first category whose set contains one of the label's words wins.
/// "single"/"dual" are deliberately absent from Camera: they would claim
/// "Dual SIM" rows before Build is consulted.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Display,
        &["display", "screen", "resolution", "protection", "refresh", "brightness"],
    ),
    (
        Category::Performance,
        &["chipset", "processor", "cpu", "gpu", "memory", "internal", "storage", "ram", "card", "slot"],
    ),
    (
        Category::Camera,
        &["camera", "triple", "quad", "penta", "video", "features", "selfie"],
    ),
    (Category::Battery, &["battery", "charging", "mah"]),
    (
        Category::Build,
        &["dimensions", "weight", "build", "sim", "colors", "materials", "body", "glass"],
    ),
    (
        Category::Network,
        &["network", "technology", "bands", "speed", "gsm", "hspa", "lte", "2g", "3g", "4g", "5g"],
    ),
    (
        Category::Software,
        &["os", "android", "ios", "announced", "status", "updates"],
    ),
];

pub fn keyword_category(label: &str) -> Option<Category> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            words(label).any(|w| keywords.iter().any(|k| k.eq_ignore_ascii_case(w)))
        })
        .map(|(category, _)| *category)
}

fn words(label: &str) -> impl Iterator<Item = &str> {
    label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
}
