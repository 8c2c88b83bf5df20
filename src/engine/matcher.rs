//! Grammar matching across lexicons.
//!
//! A sub-phrase is matched against a fixed list of productions, in priority
//! order, first success wins:
//!
//! ```text
//! 1. adverb            "aujourd'hui"          -> Adverb
//! 2. weekday day-month "Freitag, 7. Mai"      -> WeekdayDayMonth
//! 3. day-month /       "21 juin" / "maj 6"    -> DayMonth / MonthDay
//!    month-day         (per the lexicon's component order)
//! 4. bare day          "12."                  -> UnknownDay
//! ```
//!
//! Each production is evaluated against every lexicon in registry order, and
//! a lexicon only matches when *all* tokens of the sub-phrase parse under it.
//! A German weekday followed by a French month is not a match under either
//! language — the whole sub-phrase must resolve to one. That rule, plus the
//! fixed registry order, is what keeps cross-language spelling overlaps
//! deterministic.

use super::tokenize::Token;
use crate::api::Error;
use crate::lexicon::{Lexicon, Order, registry};
use crate::syntax::SyntaxNode;
use tracing::trace;

/// Match one tokenized sub-phrase. `subphrase` is the raw text, used only for
/// the [`Error::NoMatch`] message.
pub(crate) fn match_tokens(tokens: &[Token], subphrase: &str) -> Result<SyntaxNode, Error> {
    if let [word] = tokens {
        for lex in registry() {
            if lex.adverb(&word.text) {
                trace!(language = %lex.language, "adverb production");
                return Ok(SyntaxNode::Adverb(lex.language));
            }
        }
    }

    if let [first, second, third] = tokens {
        for lex in registry() {
            let Some(weekday) = lex.weekday(&first.text) else { continue };
            // The remaining two tokens must parse under the same lexicon.
            if let Some(inner) = match_pair(second, third, lex) {
                trace!(language = %lex.language, "weekday day-month production");
                return Ok(SyntaxNode::WeekdayDayMonth {
                    weekday,
                    language: lex.language,
                    inner: Box::new(inner),
                });
            }
        }
    }

    if let [first, second] = tokens {
        for lex in registry() {
            if let Some(node) = match_pair(first, second, lex) {
                trace!(language = %lex.language, "two-part production");
                return Ok(node);
            }
        }
    }

    if let [word] = tokens {
        if let Some(day) = word.day {
            trace!(day, "bare day production");
            return Ok(SyntaxNode::UnknownDay { day });
        }
    }

    Err(Error::NoMatch(subphrase.trim().to_string()))
}

/// Match a numeral + month-name pair arranged per `lex`'s component order.
fn match_pair(first: &Token, second: &Token, lex: &Lexicon) -> Option<SyntaxNode> {
    match lex.order() {
        Order::DayMonth => {
            let day = first.day?;
            let (month, form) = lex.month(&second.text, second.abbreviated)?;
            Some(SyntaxNode::DayMonth { day, month, form, language: lex.language })
        }
        Order::MonthDay => {
            let (month, form) = lex.month(&first.text, first.abbreviated)?;
            let day = second.day?;
            Some(SyntaxNode::MonthDay { day, month, form, language: lex.language })
        }
    }
}
