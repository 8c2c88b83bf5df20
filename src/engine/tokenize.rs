//! Phrase normalization.
//!
//! Two pure functions: [`split`] breaks a phrase into its range parts on a
//! dash, and [`tokenize`] turns one part into lowercase [`Token`]s. A token's
//! trailing period is semantically meaningful — it marks ordinal day numbers
//! (`7.`) and month abbreviations (`Aug.`) — so it is stripped for lookup but
//! kept as the `abbreviated` flag rather than discarded.

/// A normalized unit of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    /// Lowercased text with any trailing period removed.
    pub text: String,
    /// The token was written with a trailing period.
    pub abbreviated: bool,
    /// Populated when `text` is a day-of-month numeral (1-31).
    pub day: Option<u32>,
}

/// Split `phrase` on the range separator.
///
/// A phrase containing a dash is a range and yields two parts; anything else
/// yields one. Only the first dash separates — no input in this domain
/// contains more.
pub(crate) fn split(phrase: &str) -> Vec<&str> {
    match phrase.split_once('-') {
        Some((start, end)) => vec![start, end],
        None => vec![phrase],
    }
}

/// Tokenize one sub-phrase: split on whitespace and commas, lowercase, and
/// record the trailing-period flag per token.
pub(crate) fn tokenize(subphrase: &str) -> Vec<Token> {
    subphrase
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lowered = word.to_lowercase();
            let (text, abbreviated) = match lowered.strip_suffix('.') {
                Some(stripped) => (stripped.to_string(), true),
                None => (lowered, false),
            };
            let day = if regex!(r"^(?:[1-9]|0[1-9]|[12][0-9]|3[01])$").is_match(&text) {
                text.parse().ok()
            } else {
                None
            };
            Token { text, abbreviated, day }
        })
        .collect()
}
