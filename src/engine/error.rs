use thiserror::Error;

/// Fatal extraction failures. Anything softer (a derivation that finds no
/// pattern, a row with an unknown label) degrades to raw passthrough or an
/// omitted field and never surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Input is a blocked/stub page, not a spec page; nothing was parsed.
    #[error("input too short to be a spec page ({len} bytes, minimum {min})")]
    InvalidInput { len: usize, min: usize },

    /// The page was large enough to try, but no label/value row survived
    /// either strategy. Distinguishes "blocked" from "nothing to show".
    #[error("no recognizable specification rows found")]
    NoDataRecognized,
}
