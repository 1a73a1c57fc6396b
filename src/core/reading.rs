use chrono::{NaiveDate, NaiveDateTime};

use crate::{quantity::energy::KilowattHours, tariff::Classification};

/// Energy consumed by a meter during the interval starting at the timestamp.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    pub value: KilowattHours,
}

impl Reading {
    pub const fn new(timestamp: NaiveDateTime, value: KilowattHours) -> Self {
        Self { timestamp, value }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClassifiedReading {
    pub reading: Reading,
    pub classification: Classification,
}
