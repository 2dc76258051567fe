//! Fragment cleanup shared by every stage that touches raw markup text.

use std::sync::LazyLock;

use regex::Regex;

static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Normalize one text fragment: line breaks become ", ", remaining tags are
/// stripped, the fixed entity set is decoded, whitespace runs collapse to a
/// single space. Already-clean text passes through unchanged.
pub fn clean(raw: &str) -> String {
    let text = BR_RE.replace_all(raw, ", ");
    let text = TAG_RE.replace_all(&text, "");
    let text = decode_entities(&text);
    collapse_ws(&text)
}

/// Decode the named entities the source pages actually use. `&amp;` goes
/// last so a double-encoded `&amp;lt;` decodes one level, not two.
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
