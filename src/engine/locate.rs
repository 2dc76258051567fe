use std::sync::LazyLock;

use regex::Regex;

use crate::engine::error::ExtractError;

/// Inputs shorter than this are stub/error shells from a blocked fetch,
/// never real spec pages (those run to tens of kilobytes).
pub const MIN_INPUT_LEN: usize = 1024;

static CONTAINER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<div[^>]*id\s*=\s*["']specs-list["'][^>]*>"#).unwrap());

/// Reject blocked/stub input before any parsing is attempted.
pub fn guard(markup: &str) -> Result<(), ExtractError> {
    let len = markup.trim().len();
    if len < MIN_INPUT_LEN {
        return Err(ExtractError::InvalidInput {
            len,
            min: MIN_INPUT_LEN,
        });
    }
    Ok(())
}

/// Find the primary spec container. The fragment runs from the end of the
/// container's open tag to the end of the input: degraded pages close tags
/// unreliably, and heading texts that are not known anchors are ignored
/// downstream, so trailing page chrome cannot inject categories.
pub fn container(markup: &str) -> Option<&str> {
    let open = CONTAINER_RE.find(markup)?;
    Some(&markup[open.end()..])
}
