//! Per-language date vocabulary.
//!
//! A [`Lexicon`] bundles everything the matcher needs to recognize a date
//! phrase in one language: the "today" adverbs, the twelve month names (full
//! and abbreviated spelling), the seven weekday names, and the language's
//! conventional component order (`7 Mai` vs `maj 7`).
//!
//! Lexicons are plain immutable data, built once into a process-wide registry
//! and read lock-free from then on. Registry order is match priority: several
//! languages share spellings (`mai` is German, French and Norwegian; `maj` is
//! Swedish and Danish; `januari` is Swedish and Dutch) and the earlier lexicon
//! wins the tie. The language builders live in `src/lexicon/languages.rs`.
//!
//! Entries are stored lowercase with their native diacritics (`février`,
//! `lördag`, `četrtek`). Lookup is case-fold only; no transliteration.

#[path = "lexicon/languages.rs"]
mod languages;

use chrono::Weekday;
use once_cell::sync::Lazy;
use std::fmt;

static REGISTRY: Lazy<Vec<Lexicon>> = Lazy::new(languages::all);

/// The ordered list of registered lexicons. Earlier entries win spelling ties.
pub(crate) fn registry() -> &'static [Lexicon] {
    &REGISTRY
}

/// Languages with a registered lexicon.
///
/// `Display` renders the lowercase name used in syntax descriptors
/// (`adverb(french)`, `dm(explicit(german))`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Language {
    German,
    French,
    Swedish,
    English,
    Danish,
    Norwegian,
    Dutch,
    Slovenian,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::German => "german",
            Language::French => "french",
            Language::Swedish => "swedish",
            Language::English => "english",
            Language::Danish => "danish",
            Language::Norwegian => "norwegian",
            Language::Dutch => "dutch",
            Language::Slovenian => "slovenian",
        };
        f.write_str(name)
    }
}

/// A language's conventional order for an explicit two-part date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Order {
    /// Day before month: `7 Mai`, `21 juin`.
    DayMonth,
    /// Month before day: `maj 6`, `may 6`.
    MonthDay,
}

/// How a month name was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Form {
    Explicit,
    Abbreviated,
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Form::Explicit => "explicit",
            Form::Abbreviated => "abbreviated",
        })
    }
}

/// One language's date vocabulary. Immutable after construction.
#[derive(Debug)]
pub(crate) struct Lexicon {
    pub language: Language,
    order: Order,
    /// Single-token surface forms meaning "today".
    adverbs: &'static [&'static str],
    /// `(full, abbreviated)` per month, January first.
    months: [(&'static str, &'static str); 12],
    /// Full weekday names, Monday first.
    weekdays: [&'static str; 7],
}

impl Lexicon {
    pub(crate) fn new(
        language: Language,
        order: Order,
        adverbs: &'static [&'static str],
        months: [(&'static str, &'static str); 12],
        weekdays: [&'static str; 7],
    ) -> Self {
        Lexicon { language, order, adverbs, months, weekdays }
    }

    pub(crate) fn order(&self) -> Order {
        self.order
    }

    /// True if `word` means "today" in this language.
    pub(crate) fn adverb(&self, word: &str) -> bool {
        self.adverbs.contains(&word)
    }

    /// Look up `word` as a month name.
    ///
    /// `abbreviated_candidate` is the tokenizer's trailing-period flag. The
    /// full spelling always reports [`Form::Explicit`]. The abbreviated
    /// spelling reports [`Form::Abbreviated`] only when the writer marked it
    /// with a period (`Aug.`); an abbreviation written as a plain word
    /// (`juil`) reads as explicit.
    pub(crate) fn month(&self, word: &str, abbreviated_candidate: bool) -> Option<(u32, Form)> {
        for (idx, (full, short)) in self.months.iter().enumerate() {
            let month = idx as u32 + 1;
            if word == *full {
                return Some((month, Form::Explicit));
            }
            if word == *short {
                let form = if abbreviated_candidate { Form::Abbreviated } else { Form::Explicit };
                return Some((month, form));
            }
        }
        None
    }

    /// Look up `word` as a full weekday name.
    pub(crate) fn weekday(&self, word: &str) -> Option<Weekday> {
        let pos = self.weekdays.iter().position(|w| *w == word)?;
        Weekday::try_from(pos as u8).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(language: Language) -> &'static Lexicon {
        registry().iter().find(|l| l.language == language).unwrap()
    }

    #[test]
    fn registry_priority_resolves_shared_spellings() {
        // First lexicon that knows the word wins.
        let cases: Vec<(&str, Language)> = vec![
            ("mai", Language::German),      // also French, Norwegian
            ("maj", Language::Swedish),     // also Danish, Slovenian
            ("januari", Language::Swedish), // also Dutch
            ("juin", Language::French),
            ("marec", Language::Slovenian),
        ];
        for (word, expected) in cases {
            let hit = registry().iter().find(|l| l.month(word, false).is_some()).unwrap();
            assert_eq!(hit.language, expected, "word {word:?}");
        }
    }

    #[test]
    fn full_spelling_is_explicit() {
        let (month, form) = lexicon(Language::French).month("août", false).unwrap();
        assert_eq!((month, form), (8, Form::Explicit));
    }

    #[test]
    fn abbreviation_with_period_is_abbreviated() {
        let (month, form) = lexicon(Language::German).month("aug", true).unwrap();
        assert_eq!((month, form), (8, Form::Abbreviated));
        let (month, form) = lexicon(Language::German).month("sept", true).unwrap();
        assert_eq!((month, form), (9, Form::Abbreviated));
    }

    #[test]
    fn abbreviation_without_period_reads_as_explicit() {
        let (month, form) = lexicon(Language::French).month("juil", false).unwrap();
        assert_eq!((month, form), (7, Form::Explicit));
    }

    #[test]
    fn weekday_lookup_keeps_diacritics() {
        assert_eq!(lexicon(Language::Slovenian).weekday("četrtek"), Some(Weekday::Thu));
        assert_eq!(lexicon(Language::Swedish).weekday("lördag"), Some(Weekday::Sat));
        assert_eq!(lexicon(Language::German).weekday("freitag"), Some(Weekday::Fri));
        assert_eq!(lexicon(Language::German).weekday("fredag"), None);
    }

    #[test]
    fn every_lexicon_is_complete() {
        for lex in registry() {
            assert!(!lex.adverbs.is_empty(), "{}: no adverbs", lex.language);
            for (full, short) in &lex.months {
                assert!(!full.is_empty() && !short.is_empty(), "{}: empty month entry", lex.language);
            }
            for day in &lex.weekdays {
                assert!(!day.is_empty(), "{}: empty weekday entry", lex.language);
            }
        }
    }

    #[test]
    fn component_orders() {
        assert_eq!(lexicon(Language::Swedish).order(), Order::MonthDay);
        assert_eq!(lexicon(Language::English).order(), Order::MonthDay);
        assert_eq!(lexicon(Language::German).order(), Order::DayMonth);
        assert_eq!(lexicon(Language::French).order(), Order::DayMonth);
    }
}
