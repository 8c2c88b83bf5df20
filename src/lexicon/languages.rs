//! Compiled-in lexicon data, one builder per language.
//!
//! The vector returned by [`all`] is the registry in priority order. Keep
//! German ahead of French and Norwegian (`mai`), and Swedish ahead of Danish
//! (`maj`) and Dutch (`januari`); tests in `src/lexicon.rs` pin these ties.

use super::{Language, Lexicon, Order};

pub(super) fn all() -> Vec<Lexicon> {
    vec![german(), french(), swedish(), english(), danish(), norwegian(), dutch(), slovenian()]
}

fn german() -> Lexicon {
    Lexicon::new(
        Language::German,
        Order::DayMonth,
        &["heute"],
        [
            ("januar", "jan"),
            ("februar", "feb"),
            ("märz", "mär"),
            ("april", "apr"),
            ("mai", "mai"),
            ("juni", "jun"),
            ("juli", "jul"),
            ("august", "aug"),
            ("september", "sept"),
            ("oktober", "okt"),
            ("november", "nov"),
            ("dezember", "dez"),
        ],
        ["montag", "dienstag", "mittwoch", "donnerstag", "freitag", "samstag", "sonntag"],
    )
}

fn french() -> Lexicon {
    Lexicon::new(
        Language::French,
        Order::DayMonth,
        &["aujourd'hui"],
        [
            ("janvier", "janv"),
            ("février", "févr"),
            ("mars", "mars"),
            ("avril", "avr"),
            ("mai", "mai"),
            ("juin", "juin"),
            ("juillet", "juil"),
            ("août", "août"),
            ("septembre", "sept"),
            ("octobre", "oct"),
            ("novembre", "nov"),
            ("décembre", "déc"),
        ],
        ["lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche"],
    )
}

fn swedish() -> Lexicon {
    Lexicon::new(
        Language::Swedish,
        Order::MonthDay,
        &["idag"],
        [
            ("januari", "jan"),
            ("februari", "feb"),
            ("mars", "mar"),
            ("april", "apr"),
            ("maj", "maj"),
            ("juni", "jun"),
            ("juli", "jul"),
            ("augusti", "aug"),
            ("september", "sep"),
            ("oktober", "okt"),
            ("november", "nov"),
            ("december", "dec"),
        ],
        ["måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag", "söndag"],
    )
}

fn english() -> Lexicon {
    Lexicon::new(
        Language::English,
        Order::MonthDay,
        &["today"],
        [
            ("january", "jan"),
            ("february", "feb"),
            ("march", "mar"),
            ("april", "apr"),
            ("may", "may"),
            ("june", "jun"),
            ("july", "jul"),
            ("august", "aug"),
            ("september", "sep"),
            ("october", "oct"),
            ("november", "nov"),
            ("december", "dec"),
        ],
        ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"],
    )
}

fn danish() -> Lexicon {
    Lexicon::new(
        Language::Danish,
        Order::DayMonth,
        &["idag"],
        [
            ("januar", "jan"),
            ("februar", "feb"),
            ("marts", "mar"),
            ("april", "apr"),
            ("maj", "maj"),
            ("juni", "jun"),
            ("juli", "jul"),
            ("august", "aug"),
            ("september", "sep"),
            ("oktober", "okt"),
            ("november", "nov"),
            ("december", "dec"),
        ],
        ["mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag", "søndag"],
    )
}

fn norwegian() -> Lexicon {
    Lexicon::new(
        Language::Norwegian,
        Order::DayMonth,
        &["idag"],
        [
            ("januar", "jan"),
            ("februar", "feb"),
            ("mars", "mar"),
            ("april", "apr"),
            ("mai", "mai"),
            ("juni", "jun"),
            ("juli", "jul"),
            ("august", "aug"),
            ("september", "sep"),
            ("oktober", "okt"),
            ("november", "nov"),
            ("desember", "des"),
        ],
        ["mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag", "søndag"],
    )
}

fn dutch() -> Lexicon {
    Lexicon::new(
        Language::Dutch,
        Order::DayMonth,
        &["vandaag"],
        [
            ("januari", "jan"),
            ("februari", "feb"),
            ("maart", "mrt"),
            ("april", "apr"),
            ("mei", "mei"),
            ("juni", "jun"),
            ("juli", "jul"),
            ("augustus", "aug"),
            ("september", "sep"),
            ("oktober", "okt"),
            ("november", "nov"),
            ("december", "dec"),
        ],
        ["maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag", "zondag"],
    )
}

fn slovenian() -> Lexicon {
    Lexicon::new(
        Language::Slovenian,
        Order::DayMonth,
        &["danes"],
        [
            ("januar", "jan"),
            ("februar", "feb"),
            ("marec", "mar"),
            ("april", "apr"),
            ("maj", "maj"),
            ("junij", "jun"),
            ("julij", "jul"),
            ("avgust", "avg"),
            ("september", "sep"),
            ("oktober", "okt"),
            ("november", "nov"),
            ("december", "dec"),
        ],
        ["ponedeljek", "torek", "sreda", "četrtek", "petek", "sobota", "nedelja"],
    )
}
