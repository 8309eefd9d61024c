//! Weekday extraction.

use chrono::Weekday;
use roster_core::model::WeekdaySet;

/// A named way of reading a day list.
struct DayStrategy {
    name: &'static str,
    parse: fn(&str) -> Option<WeekdaySet>,
}

/// Tried in order; the first strategy returning `Some` wins.
///
/// Names run before single letters because `"THU"` and `"THURS"` are also
/// valid letter runs (`TH`, `U`, `R`, `S`) that mean something else.
const DAY_STRATEGIES: &[DayStrategy] = &[
    DayStrategy {
        name: "compound",
        parse: compound_days,
    },
    DayStrategy {
        name: "weekday-names",
        parse: weekday_names,
    },
    DayStrategy {
        name: "letter-codes",
        parse: letter_codes,
    },
];

/// ## Summary
/// Reads a day list such as `"M W F"`, `"TTH"`, `"MTWRF"` or `"Tue/Thu"`.
///
/// Returns the empty set when no strategy recognizes the text. A token run with
/// any unknown letter (`"TBA"`) yields no days rather than a partial set.
#[must_use]
pub fn parse_days(text: &str) -> WeekdaySet {
    try_parse_days(text).unwrap_or_default()
}

pub(super) fn try_parse_days(text: &str) -> Option<WeekdaySet> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    DAY_STRATEGIES.iter().find_map(|strategy| {
        let days = (strategy.parse)(text)?;
        tracing::trace!(strategy = strategy.name, input = text, %days, "parsed weekdays");
        Some(days)
    })
}

/// `"M W F"` and `"T TH"` in any case, with or without spaces.
fn compound_days(text: &str) -> Option<WeekdaySet> {
    let squashed: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    match squashed.as_str() {
        "MWF" => Some(WeekdaySet::from_days([Weekday::Mon, Weekday::Wed, Weekday::Fri])),
        "TTH" | "TR" => Some(WeekdaySet::from_days([Weekday::Tue, Weekday::Thu])),
        _ => None,
    }
}

/// Greedy left-to-right scan of single-letter codes. `TH` is Thursday and wins
/// over a lone `T`.
fn letter_codes(text: &str) -> Option<WeekdaySet> {
    let letters: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '/' | ',' | '-' | '.'))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let mut days = WeekdaySet::EMPTY;
    let mut i = 0;
    while i < letters.len() {
        let day = match letters[i] {
            'T' if letters.get(i + 1) == Some(&'H') => {
                i += 1;
                Weekday::Thu
            }
            'M' => Weekday::Mon,
            'T' => Weekday::Tue,
            'W' => Weekday::Wed,
            'R' => Weekday::Thu,
            'F' => Weekday::Fri,
            'S' => Weekday::Sat,
            'U' => Weekday::Sun,
            _ => return None,
        };
        days.insert(day);
        i += 1;
    }

    (!days.is_empty()).then_some(days)
}

const WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Abbreviated or full names of at least three letters: `"Mon Wed"`,
/// `"Tue/Thu"`, `"Thurs"`.
fn weekday_names(text: &str) -> Option<WeekdaySet> {
    let mut days = WeekdaySet::EMPTY;
    for token in text
        .split(|c: char| c.is_whitespace() || matches!(c, '/' | ',' | '&' | '-'))
        .filter(|t| !t.is_empty())
    {
        let token = token.trim_end_matches('.').to_ascii_lowercase();
        if token == "and" {
            continue;
        }
        if token.len() < 3 {
            return None;
        }
        let (_, day) = WEEKDAY_NAMES
            .iter()
            .find(|(name, _)| name.starts_with(token.as_str()))?;
        days.insert(*day);
    }
    (!days.is_empty()).then_some(days)
}
