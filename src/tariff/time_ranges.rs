use std::{
    collections::BTreeMap,
    fmt::{Debug, Formatter},
};

use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::{
    prelude::*,
    tariff::{DayType, Period, Season},
};

/// Half-open hour interval `[start, end)` within a day, `0 ≤ start ≤ end ≤ 24`.
#[derive(Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "(u32, u32)")]
pub struct HourRange {
    start: u32,
    end: u32,
}

impl HourRange {
    pub fn try_new(start: u32, end: u32) -> Result<Self> {
        ensure!(end <= 24, "hour range `[{start}, {end})` ends after midnight");
        ensure!(start <= end, "hour range `[{start}, {end})` ends before it starts");
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn contains(self, hour: u32) -> bool {
        (self.start <= hour) && (hour < self.end)
    }
}

impl TryFrom<(u32, u32)> for HourRange {
    type Error = Error;

    fn try_from((start, end): (u32, u32)) -> Result<Self> {
        Self::try_new(start, end)
    }
}

impl Debug for HourRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00..{:02}:00", self.start, self.end)
    }
}

/// Peak and half-peak windows of a single season and day type.
///
/// Everything outside the windows is off-peak.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PeriodWindows {
    #[serde(default)]
    pub peak: Vec<HourRange>,

    #[serde(default, rename = "halfpeak")]
    pub half_peak: Vec<HourRange>,
}

impl PeriodWindows {
    /// Peak wins over half-peak, half-peak wins over off-peak.
    #[must_use]
    pub fn period_of(&self, hour: u32) -> Period {
        if self.peak.iter().any(|range| range.contains(hour)) {
            Period::Peak
        } else if self.half_peak.iter().any(|range| range.contains(hour)) {
            Period::HalfPeak
        } else {
            Period::OffPeak
        }
    }
}

/// Tariff windows per season and day type, as stored in `time_ranges.json`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct TimeRanges(pub BTreeMap<Season, BTreeMap<DayType, PeriodWindows>>);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub season: Season,
    pub day_type: DayType,
    pub period: Period,
}

impl TimeRanges {
    #[must_use]
    pub fn windows(&self, season: Season, day_type: DayType) -> Option<&PeriodWindows> {
        self.0.get(&season)?.get(&day_type)
    }

    #[must_use]
    pub fn classify(&self, timestamp: NaiveDateTime) -> Classification {
        let season = Season::of(&timestamp);
        let day_type = DayType::of(&timestamp);
        let period = self
            .windows(season, day_type)
            .map_or(Period::Unknown, |windows| windows.period_of(timestamp.hour()));
        Classification { season, day_type, period }
    }
}
