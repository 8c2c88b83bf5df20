//! The "time machine": turning syntax nodes into concrete dates.
//!
//! Nodes are resolved in input order against a moving lower bound that starts
//! at the reference date and advances to each resolved date. One rule covers
//! everything exercised:
//!
//! - a fully written month/day takes the first year at or after the bound
//!   where it lands on or after the bound (so a date already passed this year
//!   rolls over to next year);
//! - a bare day searches forward month by month for the first month that
//!   contains that day-of-month, *at or after* the bound for the first node
//!   of a call and *strictly after* it for later nodes — a range's second
//!   element never lands on or before its first.
//!
//! Both searches carry an explicit horizon so a day that fits no month
//! (`31 april`, or Feb 29 outside the leap cycle) fails with
//! [`Error::InvalidDay`] instead of looping.

use crate::api::Error;
use crate::syntax::SyntaxNode;
use chrono::{Datelike, NaiveDate};
use tracing::trace;

/// Years scanned for a fully written month/day. Anything a leap cycle cannot
/// satisfy within this window is structurally impossible.
const YEAR_HORIZON: i32 = 8;

/// Months scanned forward for a bare day before giving up.
const MONTH_HORIZON: u32 = 24;

/// Resolve `nodes` in order against `reference`. The output has the same
/// length and order as `nodes`.
pub(crate) fn resolve(nodes: &[SyntaxNode], reference: NaiveDate) -> Result<Vec<NaiveDate>, Error> {
    let mut dates = Vec::with_capacity(nodes.len());
    let mut lower_bound = reference;

    for (idx, node) in nodes.iter().enumerate() {
        let date = resolve_node(node, reference, lower_bound, idx > 0)?;
        trace!(%date, %lower_bound, ?node, "node resolved");
        lower_bound = date;
        dates.push(date);
    }

    Ok(dates)
}

/// Resolve a single node against the current bound. `continuation` is true
/// for every node after the first: a range continuation must move strictly
/// forward, while a first node may land on the bound itself.
fn resolve_node(
    node: &SyntaxNode,
    reference: NaiveDate,
    lower_bound: NaiveDate,
    continuation: bool,
) -> Result<NaiveDate, Error> {
    match node {
        // Today is today regardless of position in the phrase.
        SyntaxNode::Adverb(_) => Ok(reference),
        SyntaxNode::UnknownDay { day } => first_month_containing(*day, lower_bound, continuation),
        SyntaxNode::DayMonth { day, month, .. } | SyntaxNode::MonthDay { day, month, .. } => {
            next_occurrence(*month, *day, lower_bound)
        }
        // The weekday never affects the resolved date.
        SyntaxNode::WeekdayDayMonth { inner, .. } => {
            resolve_node(inner, reference, lower_bound, continuation)
        }
    }
}

/// First valid `month`/`day` date at or after `lower_bound`, scanning years
/// forward from the bound's year.
fn next_occurrence(month: u32, day: u32, lower_bound: NaiveDate) -> Result<NaiveDate, Error> {
    for year in lower_bound.year()..=lower_bound.year() + YEAR_HORIZON {
        if let Some(candidate) = NaiveDate::from_ymd_opt(year, month, day) {
            if candidate >= lower_bound {
                return Ok(candidate);
            }
        }
    }
    Err(Error::InvalidDay(day))
}

/// First month at or after `lower_bound`'s month that contains `day`, such
/// that the resulting date is after the bound (strictly when `strict`).
/// Months too short for the day are skipped; the scan wraps across years.
fn first_month_containing(day: u32, lower_bound: NaiveDate, strict: bool) -> Result<NaiveDate, Error> {
    let mut year = lower_bound.year();
    let mut month = lower_bound.month();

    for _ in 0..MONTH_HORIZON {
        if let Some(candidate) = NaiveDate::from_ymd_opt(year, month, day) {
            if candidate > lower_bound || (!strict && candidate == lower_bound) {
                return Ok(candidate);
            }
        }
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    Err(Error::InvalidDay(day))
}
