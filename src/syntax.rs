//! Recognized grammatical shapes of a date component.
//!
//! A [`SyntaxNode`] records *how* a component was written — which language,
//! which order, full or abbreviated month — before any missing month/year is
//! filled in by the resolver. `Display` renders the descriptor grammar
//! reported to callers:
//!
//! ```text
//! adverb(french)
//! dm(explicit(french))                    day before month
//! md(explicit(swedish))                   month before day
//! sd(wd(german), dm(abbreviated(german))) weekday-prefixed date
//! d(unknown)                              bare day, month inferred
//! ```

use crate::lexicon::{Form, Language};
use chrono::Weekday;
use std::fmt;

/// The recognized shape of one sub-phrase. Built by the matcher, consumed by
/// the resolver; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SyntaxNode {
    /// A word meaning "today".
    Adverb(Language),
    /// Day number followed by a month name.
    DayMonth { day: u32, month: u32, form: Form, language: Language },
    /// Month name followed by a day number.
    MonthDay { day: u32, month: u32, form: Form, language: Language },
    /// A weekday name prefixing a day-month component. The weekday is
    /// explanatory only; it is never checked against the resolved date.
    WeekdayDayMonth { weekday: Weekday, language: Language, inner: Box<SyntaxNode> },
    /// A bare day number; the month is inferred during resolution.
    UnknownDay { day: u32 },
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxNode::Adverb(language) => write!(f, "adverb({language})"),
            SyntaxNode::DayMonth { form, language, .. } => write!(f, "dm({form}({language}))"),
            SyntaxNode::MonthDay { form, language, .. } => write!(f, "md({form}({language}))"),
            SyntaxNode::WeekdayDayMonth { language, inner, .. } => {
                write!(f, "sd(wd({language}), {inner})")
            }
            SyntaxNode::UnknownDay { .. } => f.write_str("d(unknown)"),
        }
    }
}
