//! Deterministic parsing of loose, human-written date phrases.
//!
//! People write dates the way their language taught them: `28. Aug. - 1.
//! Sept.`, `maj 6 - 14`, `Freitag, 7. Mai`, `aujourd'hui`. This crate turns
//! such phrases into concrete calendar dates relative to a caller-supplied
//! reference date, and reports *how* each component was written as a compact
//! syntax descriptor.
//!
//! Interpreting a phrase is a pipeline:
//!
//! ```text
//! phrase ── split on dash ──▶ sub-phrases (1 for a date, 2 for a range)
//!                                │
//!                                ▼
//!                        tokenize (engine/tokenize.rs)
//!                          - lowercase, split on whitespace/commas
//!                          - trailing period kept as abbreviation flag
//!                                │
//!                                ▼
//!                        match_tokens (engine/matcher.rs)
//!                          - fixed production list, first match wins
//!                          - every lexicon tried in registry order
//!                                │
//!                                ▼
//!                        resolve (engine/resolver.rs)
//!                          - "time machine": fill in missing month/year
//!                            by searching forward from a moving bound
//!                                │
//!                                ▼
//!                           Resolution
//! ```
//!
//! Each sub-phrase commits to exactly one language: a match is only accepted
//! when every token of the sub-phrase parses under the same lexicon
//! (`src/lexicon.rs`). The lexicons are compiled-in, immutable data; there is
//! no locale loading and no runtime mutation, so concurrent calls need no
//! coordination.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use whence::{Context, when_with};
//!
//! let ctx = Context { reference_date: NaiveDate::from_ymd_opt(2021, 4, 27).unwrap() };
//! let res = when_with("21 juin - 9", &ctx).unwrap();
//! assert_eq!(res.dates, vec![
//!     NaiveDate::from_ymd_opt(2021, 6, 21).unwrap(),
//!     NaiveDate::from_ymd_opt(2021, 7, 9).unwrap(),
//! ]);
//! assert_eq!(res.syntax, vec!["dm(explicit(french))", "d(unknown)"]);
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod lexicon;
mod syntax;

pub use api::{Context, Error, Resolution, when, when_with};
