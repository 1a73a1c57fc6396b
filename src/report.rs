//! Fetch the selected meters and run them through the tariff pipeline.

use itertools::Itertools;

use crate::{
    api::source::MeterSource,
    company::CompanyId,
    core::{
        ClassifiedReading,
        DailyAggregate,
        PeriodTotals,
        Reading,
        aggregate_daily,
        classify_all,
        merge_daily,
        merge_readings,
    },
    ops::DateRange,
    prelude::*,
    quantity::energy::KilowattHours,
    tariff::TimeRanges,
};

#[must_use]
#[derive(bon::Builder)]
pub struct Report<'a, S: MeterSource> {
    source: &'a S,
    company: &'a CompanyId,
    serial_numbers: &'a [String],
    range: DateRange,
    time_ranges: &'a TimeRanges,
}

/// Totals of every meter and of the whole selection.
pub struct Breakdown {
    pub meters: Vec<(String, PeriodTotals<KilowattHours>)>,
    pub daily: Vec<DailyAggregate>,
}

impl Breakdown {
    pub fn total(&self) -> PeriodTotals<KilowattHours> {
        self.daily.iter().map(|aggregate| aggregate.energy).sum()
    }
}

impl<S: MeterSource> Report<'_, S> {
    async fn fetch(&self) -> Result<Vec<Vec<Reading>>> {
        ensure!(!self.serial_numbers.is_empty(), "no meters selected");
        let series =
            self.source.get_all_readings(self.company, self.serial_numbers, self.range).await?;
        info!(
            n_meters = series.len(),
            n_readings = series.iter().map(Vec::len).sum::<usize>(),
            n_days = self.range.n_days(),
            "fetched all meters"
        );
        Ok(series)
    }

    /// Combine the selected meters and classify every reading.
    pub async fn classified_readings(&self) -> Result<Vec<ClassifiedReading>> {
        Ok(classify_all(merge_readings(self.fetch().await?), self.time_ranges))
    }

    /// Combine the selected meters and aggregate per date and period.
    pub async fn daily_usage(&self) -> Result<Vec<DailyAggregate>> {
        Ok(aggregate_daily(merge_readings(self.fetch().await?), self.time_ranges))
    }

    /// Aggregate every meter on its own, then sum the aggregates.
    pub async fn breakdown(&self) -> Result<Breakdown> {
        let per_meter = self
            .fetch()
            .await?
            .into_iter()
            .map(|readings| aggregate_daily(readings, self.time_ranges))
            .collect_vec();
        let meters = self
            .serial_numbers
            .iter()
            .zip(&per_meter)
            .map(|(serial_number, daily)| {
                (serial_number.clone(), daily.iter().map(|aggregate| aggregate.energy).sum())
            })
            .collect();
        Ok(Breakdown { meters, daily: merge_daily(per_meter) })
    }
}
