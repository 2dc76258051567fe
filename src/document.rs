use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The seven canonical output buckets, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Display,
    Performance,
    Camera,
    Battery,
    Build,
    Network,
    Software,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Display,
        Category::Performance,
        Category::Camera,
        Category::Battery,
        Category::Build,
        Category::Network,
        Category::Software,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Display => "Display",
            Category::Performance => "Performance",
            Category::Camera => "Camera",
            Category::Battery => "Battery",
            Category::Build => "Build",
            Category::Network => "Network",
            Category::Software => "Software",
        }
    }
}

/// Working map shared by the extraction strategies and the post-processor.
/// Ordered on both levels so identical input always serializes identically.
pub type SpecMap = BTreeMap<Category, BTreeMap<String, String>>;

/// Terminal artifact: category → (canonical label → value), empty
/// categories already pruned. Downstream treats it as an opaque nested
/// string structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecDocument {
    categories: SpecMap,
}

impl SpecDocument {
    pub(crate) fn new(categories: SpecMap) -> Self {
        SpecDocument { categories }
    }

    pub fn category(&self, category: Category) -> Option<&BTreeMap<String, String>> {
        self.categories.get(&category)
    }

    pub fn field(&self, category: Category, label: &str) -> Option<&str> {
        self.categories
            .get(&category)?
            .get(label)
            .map(String::as_str)
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, &BTreeMap<String, String>)> {
        self.categories.iter().map(|(c, m)| (*c, m))
    }

    /// Total number of label/value fields across all categories.
    pub fn field_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }
}
