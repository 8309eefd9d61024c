//! Single time tokens.

use std::sync::LazyLock;

use regex::Regex;

/// Digits, optional `:MM`, optional meridiem (`am`, `p.m.`, `PM`).
static TIME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,4})(?::(\d{2}))?\s*(?:([ap])\.?\s*m\b\.?)?")
        .expect("time token pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// ## Summary
/// Parses a time token into fractional hours of the day.
///
/// Accepts `"H:MM AM"`, `"H PM"`, and `"HMM"` with an optional meridiem.
/// 12 AM is midnight (0), 12 PM is noon (12). Without a meridiem the hour is
/// read as 24-hour time.
///
/// Returns `None` when the text has no digits or the value is out of range, so
/// "no time" stays distinct from midnight.
#[must_use]
pub fn parse_time(text: &str) -> Option<f64> {
    let caps = TIME_TOKEN.captures(text)?;
    let digits = caps.get(1)?.as_str();

    let (hour, minute) = match caps.get(2) {
        Some(minute) => (digits.parse::<u32>().ok()?, minute.as_str().parse::<u32>().ok()?),
        None if digits.len() > 2 => {
            let (hour, minute) = digits.split_at(digits.len() - 2);
            (hour.parse::<u32>().ok()?, minute.parse::<u32>().ok()?)
        }
        None => (digits.parse::<u32>().ok()?, 0),
    };

    let meridiem = caps.get(3).map(|m| {
        if m.as_str().eq_ignore_ascii_case("a") {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    });

    let hour = match meridiem {
        Some(_) if hour > 12 => return None,
        Some(Meridiem::Am) if hour == 12 => 0,
        Some(Meridiem::Pm) if hour < 12 => hour + 12,
        _ => hour,
    };

    if minute > 59 || hour > 24 || (hour == 24 && minute > 0) {
        return None;
    }

    Some(f64::from(hour) + f64::from(minute) / 60.0)
}
