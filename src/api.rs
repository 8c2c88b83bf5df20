use crate::engine;
use chrono::{Local, NaiveDate};
use thiserror::Error as ThisError;

/// Parsing context.
///
/// Holds the reference date ("today") against which implicit years and months
/// are resolved.
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference date used to resolve partially specified components.
    pub reference_date: NaiveDate,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            Self { reference_date: NaiveDate::from_ymd_opt(2021, 4, 27).unwrap() }
        } else {
            Self { reference_date: Local::now().date_naive() }
        }
    }
}

/// The two ways a phrase can fail. Nothing else escapes the crate; a call
/// either returns a fully populated [`Resolution`] or one of these.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// No registered lexicon recognizes the sub-phrase under any production.
    #[error("no date grammar matches `{0}` in any registered language")]
    NoMatch(String),
    /// The day-of-month fits no candidate month within the search horizon.
    #[error("day {0} does not fit any month within the search horizon")]
    InvalidDay(u32),
}

/// Result from [`when`] and [`when_with`].
///
/// `dates` and `syntax` are index-aligned and equally long: one entry for a
/// single-date phrase, two for a range. `syntax` holds the descriptor of the
/// grammar form each component was written in, e.g. `dm(abbreviated(german))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved calendar dates, in input order (non-decreasing).
    pub dates: Vec<NaiveDate>,
    /// Descriptor of the recognized grammar form per date.
    pub syntax: Vec<String>,
}

/// Interpret `phrase` against the default [`Context`] (today's date).
///
/// # Example
/// ```
/// let res = whence::when("today").unwrap();
/// assert_eq!(res.syntax, vec!["adverb(english)"]);
/// ```
pub fn when(phrase: &str) -> Result<Resolution, Error> {
    when_with(phrase, &Context::default())
}

/// Interpret `phrase` against the supplied `context`.
///
/// Use this when you want deterministic resolution by fixing the reference
/// date. Sub-phrases of a range are matched independently and may commit to
/// different languages; the call fails atomically if either side does not
/// parse.
pub fn when_with(phrase: &str, context: &Context) -> Result<Resolution, Error> {
    let resolved = engine::interpret(phrase, context.reference_date)?;

    Ok(Resolution {
        dates: resolved.iter().map(|r| r.date).collect(),
        syntax: resolved.iter().map(|r| r.node.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context(y: i32, m: u32, d: u32) -> Context {
        Context { reference_date: NaiveDate::from_ymd_opt(y, m, d).unwrap() }
    }

    fn check(phrase: &str, ctx: &Context, dates: &[(i32, u32, u32)], syntax: &[&str]) {
        let res = when_with(phrase, ctx).unwrap();
        let expected: Vec<NaiveDate> =
            dates.iter().map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()).collect();
        assert_eq!(res.dates, expected, "phrase {phrase:?}");
        assert_eq!(res.syntax, syntax, "phrase {phrase:?}");
    }

    #[test]
    fn present_adverb() {
        check("aujourd'hui", &context(2021, 1, 1), &[(2021, 1, 1)], &["adverb(french)"]);
    }

    #[test]
    fn single_explicit_week_day_and_month() {
        check(
            "Freitag, 7. Mai",
            &context(2021, 4, 27),
            &[(2021, 5, 7)],
            &["sd(wd(german), dm(explicit(german)))"],
        );
    }

    #[test]
    fn explicit_post_fixed_months_with_abbreviations() {
        check(
            "28. Aug. - 1. Sept.",
            &context(2021, 4, 27),
            &[(2021, 8, 28), (2021, 9, 1)],
            &["dm(abbreviated(german))", "dm(abbreviated(german))"],
        );
    }

    #[test]
    fn explicit_post_fixed_months_without_abbreviations() {
        check(
            "21 juin - 9 juil",
            &context(2021, 4, 27),
            &[(2021, 6, 21), (2021, 7, 9)],
            &["dm(explicit(french))", "dm(explicit(french))"],
        );
    }

    #[test]
    fn implicit_start_month_and_abbreviated_end() {
        check(
            "12. - 14. Aug.",
            &context(2021, 4, 27),
            &[(2021, 5, 12), (2021, 8, 14)],
            &["d(unknown)", "dm(abbreviated(german))"],
        );
    }

    #[test]
    fn implicit_start_month_and_post_fixed_explicit_end() {
        check(
            "12 - 14 Mai",
            &context(2021, 4, 27),
            &[(2021, 5, 12), (2021, 5, 14)],
            &["d(unknown)", "dm(explicit(german))"],
        );
    }

    #[test]
    fn post_fixed_start_month_and_implicit_end() {
        check(
            "21 juin - 9",
            &context(2021, 4, 27),
            &[(2021, 6, 21), (2021, 7, 9)],
            &["dm(explicit(french))", "d(unknown)"],
        );
    }

    #[test]
    fn present_prefixed_start_month_and_implicit_end() {
        check(
            "maj 6 - 14",
            &context(2021, 5, 6),
            &[(2021, 5, 6), (2021, 5, 14)],
            &["md(explicit(swedish))", "d(unknown)"],
        );
    }

    #[test]
    fn future_prefixed_start_month_and_implicit_end() {
        check(
            "maj 6 - 14",
            &context(2021, 5, 5),
            &[(2021, 5, 6), (2021, 5, 14)],
            &["md(explicit(swedish))", "d(unknown)"],
        );
    }

    #[test]
    fn past_prefixed_start_month_and_implicit_end() {
        check(
            "januari 1 - 14",
            &context(2021, 4, 27),
            &[(2022, 1, 1), (2022, 1, 14)],
            &["md(explicit(swedish))", "d(unknown)"],
        );
    }

    #[test]
    fn mixed_languages_across_a_range() {
        // Each side of a range commits to a language on its own.
        check(
            "heute - 9 juil",
            &context(2021, 4, 27),
            &[(2021, 4, 27), (2021, 7, 9)],
            &["adverb(german)", "dm(explicit(french))"],
        );
    }

    #[test]
    fn unmatched_phrase_fails_atomically() {
        let ctx = context(2021, 4, 27);
        assert_eq!(
            when_with("next week", &ctx),
            Err(Error::NoMatch("next week".into()))
        );
        // One good side does not rescue a range.
        assert_eq!(
            when_with("21 juin - gibberish", &ctx),
            Err(Error::NoMatch("gibberish".into()))
        );
    }

    #[test]
    fn impossible_day_fails() {
        assert_eq!(when_with("31 april", &context(2021, 1, 1)), Err(Error::InvalidDay(31)));
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let ctx = context(2021, 4, 27);
        let first = when_with("12. - 14. Aug.", &ctx).unwrap();
        let second = when_with("12. - 14. Aug.", &ctx).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn output_sequences_stay_index_aligned() {
        let ctx = context(2021, 4, 27);
        for (phrase, len) in [("heute", 1), ("21 juin - 9", 2), ("maj 6 - 14", 2)] {
            let res = when_with(phrase, &ctx).unwrap();
            assert_eq!(res.dates.len(), len, "phrase {phrase:?}");
            assert_eq!(res.syntax.len(), len, "phrase {phrase:?}");
        }
    }

    #[test]
    fn ranges_are_strictly_increasing() {
        let ctx = context(2021, 4, 27);
        for phrase in ["28. Aug. - 1. Sept.", "12. - 14. Aug.", "21 juin - 9", "januari 1 - 14"] {
            let res = when_with(phrase, &ctx).unwrap();
            assert!(res.dates[1] > res.dates[0], "phrase {phrase:?}");
        }
    }
}
