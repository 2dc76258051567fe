use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::document::SpecMap;
use crate::engine::schema::Anchor;
use crate::engine::{labels, rows, sanitize};

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<th[^>]*>(.*?)</th>").unwrap());

/// Primary strategy: each recognized section heading owns the span up to
/// the next recognized heading (or the end of the fragment); rows inside
/// the span are normalized under that anchor. Headings that are not known
/// anchors bound nothing, so their rows fall into the preceding span and
/// live or die by its label rules. Missing anchors simply contribute
/// nothing.
pub fn extract(fragment: &str) -> SpecMap {
    let mut map = SpecMap::new();

    let spans = anchor_spans(fragment);
    for (i, (anchor, body_start)) in spans.iter().enumerate() {
        let body_end = spans
            .get(i + 1)
            .map(|(_, next_start)| heading_start(fragment, *next_start))
            .unwrap_or(fragment.len());
        let region = &fragment[*body_start..body_end];

        for pair in rows::scan(region) {
            let Some(label) = labels::normalize(&pair.label, *anchor) else {
                debug!("{}: dropping noise row '{}'", anchor.name(), pair.label);
                continue;
            };
            map.entry(anchor.category())
                .or_default()
                .insert(label, pair.value);
        }
    }

    map
}

/// Recognized headings as (anchor, offset just past the heading cell),
/// in document order.
fn anchor_spans(fragment: &str) -> Vec<(Anchor, usize)> {
    let mut spans = Vec::new();
    for caps in HEADING_RE.captures_iter(fragment) {
        let Some(whole) = caps.get(0) else { continue };
        let text = sanitize::clean(&caps[1]);
        if let Some(anchor) = Anchor::from_heading(&text) {
            spans.push((anchor, whole.end()));
        }
    }
    spans
}

/// Walk back from the end of a heading cell to its opening `<th`, so the
/// previous region stops before the heading rather than inside it.
fn heading_start(fragment: &str, heading_end: usize) -> usize {
    fragment[..heading_end].rfind("<th").unwrap_or(heading_end)
}
