use std::fmt::{Debug, Formatter};

use chrono::{Datelike, NaiveDate};

use crate::prelude::*;

/// Calendar dates, both ends included.
pub type DateRange = RangeInclusive<NaiveDate>;

#[must_use]
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct RangeInclusive<T: Copy> {
    pub min: T,
    pub max: T,
}

impl<T: Copy + Debug> Debug for RangeInclusive<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..={:?}", self.min, self.max)
    }
}

impl<T: Copy + PartialOrd> RangeInclusive<T> {
    #[must_use]
    pub fn contains(self, other: T) -> bool {
        (self.min <= other) && (other <= self.max)
    }
}

impl DateRange {
    pub fn try_new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        ensure!(from <= to, "the range starts on {from} but ends earlier, on {to}");
        Ok(Self { min: from, max: to })
    }

    /// Iterate over every date in the range.
    pub fn dates(self) -> impl Iterator<Item = NaiveDate> {
        self.min.iter_days().take_while(move |date| *date <= self.max)
    }

    /// Build the date for the month and day, picking the year of the range that puts it inside.
    ///
    /// Falls back to the starting year when no such year exists.
    #[must_use]
    pub fn resolve_date(self, month: u32, day: u32) -> Option<NaiveDate> {
        (self.min.year()..=self.max.year())
            .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
            .find(|date| self.contains(*date))
            .or_else(|| NaiveDate::from_ymd_opt(self.min.year(), month, day))
    }

    /// Number of days in the range.
    #[must_use]
    pub fn n_days(self) -> usize {
        self.dates().count()
    }
}
