//! The interpretation pipeline.
//!
//! [`interpret`] is the single entry point used by the public API. It wires
//! the three stages together:
//!
//! ```text
//! phrase ── tokenize::split ──▶ 1..=2 sub-phrases
//!              │ per sub-phrase:
//!              │   tokenize::tokenize ──▶ tokens
//!              │   matcher::match_tokens ─▶ SyntaxNode (one language, one
//!              │                            production — or Error::NoMatch)
//!              ▼
//!        resolver::resolve ──▶ concrete dates, in input order
//! ```
//!
//! Sub-phrases are matched independently and may commit to different
//! languages; resolution however runs over the whole ordered node list so a
//! range's second element is bounded by the first. A failure in any stage
//! fails the whole call — no partial results.
//!
//! ## Responsibilities by module
//!
//! - `tokenize.rs`: dash splitting, lowercasing, the trailing-period
//!   abbreviation flag, day-numeral detection.
//! - `matcher.rs`: the fixed grammar production list, tried against every
//!   lexicon in registry order.
//! - `resolver.rs`: the "time machine" — fills in missing month/year data by
//!   searching forward from a moving lower bound.

#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/resolver.rs"]
mod resolver;
#[path = "engine/tokenize.rs"]
mod tokenize;

use crate::api::Error;
use crate::syntax::SyntaxNode;
use chrono::NaiveDate;
use tracing::debug;

/// A concrete date paired with the syntax node it came from.
#[derive(Debug, Clone)]
pub(crate) struct Resolved {
    pub date: NaiveDate,
    pub node: SyntaxNode,
}

/// Interpret `phrase` relative to `reference`.
///
/// Returns one [`Resolved`] per sub-phrase, in input order.
pub(crate) fn interpret(phrase: &str, reference: NaiveDate) -> Result<Vec<Resolved>, Error> {
    let mut nodes = Vec::new();
    for part in tokenize::split(phrase) {
        let tokens = tokenize::tokenize(part);
        let node = matcher::match_tokens(&tokens, part)?;
        debug!(part, node = %node, "sub-phrase matched");
        nodes.push(node);
    }

    let dates = resolver::resolve(&nodes, reference)?;
    debug!(?dates, %reference, "phrase resolved");

    Ok(dates.into_iter().zip(nodes).map(|(date, node)| Resolved { date, node }).collect())
}
