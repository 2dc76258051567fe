use crate::document::Category;
use crate::engine::schema::{self, Anchor};

/// Map a raw row label to its canonical label, or `None` to skip the row.
/// Pure function of its two arguments.
///
/// The two camera anchors are restrictive: only lens-count rows (plus
/// Video/Features on the main camera) carry signal there, everything else
/// is sensor noise the editors never want.
pub fn normalize(raw: &str, anchor: Anchor) -> Option<String> {
    match anchor {
        Anchor::MainCamera => {
            if schema::is_lens_descriptor(raw) {
                Some("Main".to_string())
            } else if raw.eq_ignore_ascii_case("Video") {
                Some("Video".to_string())
            } else if raw.eq_ignore_ascii_case("Features") {
                Some("Features".to_string())
            } else {
                None
            }
        }
        Anchor::SelfieCamera => {
            if schema::is_lens_descriptor(raw) {
                Some("Front".to_string())
            } else {
                None
            }
        }
        _ => Some(rename_or_identity(raw, anchor.category())),
    }
}

/// Category-level normalization for the fallback path, where no anchor
/// context exists. Keeps every row: the degraded path prefers misfiled
/// data over dropped data. Lens-count labels map to `Main` because a
/// selfie section cannot be told apart without its anchor.
pub fn normalize_fallback(raw: &str, category: Category) -> String {
    if category == Category::Camera && schema::is_lens_descriptor(raw) {
        return "Main".to_string();
    }
    rename_or_identity(raw, category)
}

fn rename_or_identity(raw: &str, category: Category) -> String {
    schema::rename(category, raw)
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}
