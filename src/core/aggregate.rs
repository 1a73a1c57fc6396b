use std::ops::Add;

use chrono::NaiveDate;

use crate::{
    core::{ClassifiedReading, Reading, classify_all, group_by_date},
    quantity::{cost::Cost, energy::KilowattHours},
    tariff::{Period, PriceTable, Season, TimeRanges},
};

/// Something split by tariff period.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, derive_more::Add, derive_more::AddAssign)]
pub struct PeriodTotals<T> {
    pub peak: T,
    pub half_peak: T,
    pub off_peak: T,
}

impl<T: Copy + Add<Output = T>> PeriodTotals<T> {
    pub fn total(self) -> T {
        self.peak + self.half_peak + self.off_peak
    }
}

impl<T: Add<Output = T> + Default> std::iter::Sum for PeriodTotals<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |sum, item| sum + item)
    }
}

impl<'a> FromIterator<&'a ClassifiedReading> for PeriodTotals<KilowattHours> {
    /// Sum the readings per period, skipping the unknown ones.
    fn from_iter<I: IntoIterator<Item = &'a ClassifiedReading>>(iter: I) -> Self {
        let mut totals = Self::default();
        for reading in iter {
            let value = reading.reading.value;
            match reading.classification.period {
                Period::Peak => totals.peak += value,
                Period::HalfPeak => totals.half_peak += value,
                Period::OffPeak => totals.off_peak += value,
                Period::Unknown => {}
            }
        }
        totals
    }
}

/// Energy per tariff period on a single date.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub energy: PeriodTotals<KilowattHours>,
    pub is_summer: bool,
}

impl DailyAggregate {
    /// Aggregate the readings of a single date.
    pub fn from_bucket(date: NaiveDate, readings: &[ClassifiedReading]) -> Self {
        let is_summer = readings
            .first()
            .map_or_else(|| Season::of(&date), |reading| reading.classification.season)
            .is_summer();
        Self { date, energy: readings.iter().collect(), is_summer }
    }

    pub const fn season(&self) -> Season {
        Season::from_summer(self.is_summer)
    }

    /// Price the energy with the season's rates.
    pub fn cost(&self, prices: &PriceTable) -> DailyCost {
        let season = self.season();
        DailyCost {
            date: self.date,
            cost: PeriodTotals {
                peak: self.energy.peak * prices.price(season, Period::Peak),
                half_peak: self.energy.half_peak * prices.price(season, Period::HalfPeak),
                off_peak: self.energy.off_peak * prices.price(season, Period::OffPeak),
            },
            is_summer: self.is_summer,
        }
    }
}

/// Cost per tariff period on a single date.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DailyCost {
    pub date: NaiveDate,
    pub cost: PeriodTotals<Cost>,
    pub is_summer: bool,
}

impl DailyCost {
    pub fn total(&self) -> Cost {
        self.cost.total()
    }
}

/// Run the whole pipeline: classify, group by date, and sum per period.
pub fn aggregate_daily(
    readings: impl IntoIterator<Item = Reading>,
    time_ranges: &TimeRanges,
) -> Vec<DailyAggregate> {
    group_by_date(classify_all(readings, time_ranges))
        .into_iter()
        .map(|(date, bucket)| DailyAggregate::from_bucket(date, &bucket))
        .collect()
}
