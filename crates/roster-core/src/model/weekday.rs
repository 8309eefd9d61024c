//! Compact weekday sets.

use std::fmt;

use chrono::Weekday;

/// A set of weekdays stored as a bitmask, Monday in bit 0.
///
/// Indices follow `Weekday::num_days_from_monday`, so 0 is Monday and 6 is
/// Sunday. Iteration is always Monday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates a set from the given weekdays.
    #[must_use]
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut set = Self::EMPTY;
        for day in days {
            set.insert(day);
        }
        set
    }

    /// Creates a set from Monday-based indices, ignoring anything above 6.
    #[must_use]
    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> Self {
        Self::from_days(indices.into_iter().filter_map(|i| Weekday::try_from(i).ok()))
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= Self::bit(day);
    }

    #[must_use]
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterates the contained weekdays, Monday first.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        (0..7u8)
            .filter_map(|i| Weekday::try_from(i).ok())
            .filter(move |day| self.contains(*day))
    }

    /// Monday-based indices of the contained weekdays.
    pub fn indices(self) -> impl Iterator<Item = u8> {
        self.iter().map(|day| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "num_days_from_monday is always 0-6"
            )]
            let index = day.num_days_from_monday() as u8;
            index
        })
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::from_days(iter)
    }
}

/// Single-letter registrar codes (`MTWRFSU`).
impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            let code = match day {
                Weekday::Mon => 'M',
                Weekday::Tue => 'T',
                Weekday::Wed => 'W',
                Weekday::Thu => 'R',
                Weekday::Fri => 'F',
                Weekday::Sat => 'S',
                Weekday::Sun => 'U',
            };
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = WeekdaySet::EMPTY;
        assert!(set.is_empty());
        set.insert(Weekday::Wed);
        assert!(set.contains(Weekday::Wed));
        assert!(!set.contains(Weekday::Mon));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iteration_is_monday_first() {
        let set = WeekdaySet::from_days([Weekday::Fri, Weekday::Mon, Weekday::Wed]);
        let days: Vec<_> = set.iter().collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        assert_eq!(set.indices().collect::<Vec<_>>(), vec![0, 2, 4]);
    }

    #[test]
    fn intersection() {
        let mwf = WeekdaySet::from_indices([0, 2, 4]);
        let tr = WeekdaySet::from_indices([1, 3]);
        let mw = WeekdaySet::from_indices([0, 2]);
        assert!(!mwf.intersects(tr));
        assert!(mwf.intersects(mw));
        assert_eq!(mwf.intersection(mw), mw);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let set = WeekdaySet::from_indices([0, 9]);
        assert_eq!(set, WeekdaySet::from_days([Weekday::Mon]));
    }

    #[test]
    fn display_uses_registrar_codes() {
        let set = WeekdaySet::from_days([Weekday::Tue, Weekday::Thu]);
        assert_eq!(set.to_string(), "TR");
    }
}
