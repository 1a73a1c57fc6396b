use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    core::{DailyAggregate, Reading},
    quantity::energy::KilowattHours,
};

/// Combine several meters into one virtual meter by summing the readings that share a timestamp.
///
/// The result is ordered by timestamp.
pub fn merge_readings<S>(series: impl IntoIterator<Item = S>) -> Vec<Reading>
where
    S: IntoIterator<Item = Reading>,
{
    let mut merged: BTreeMap<NaiveDateTime, KilowattHours> = BTreeMap::new();
    for reading in series.into_iter().flatten() {
        *merged.entry(reading.timestamp).or_default() += reading.value;
    }
    merged.into_iter().map(|(timestamp, value)| Reading::new(timestamp, value)).collect()
}

/// Sum independently aggregated meters per date.
///
/// Each meter is classified on its own, so this is the way to build group totals
/// while keeping the per-meter aggregates around.
pub fn merge_daily<S>(series: impl IntoIterator<Item = S>) -> Vec<DailyAggregate>
where
    S: IntoIterator<Item = DailyAggregate>,
{
    let mut merged: BTreeMap<NaiveDate, DailyAggregate> = BTreeMap::new();
    for aggregate in series.into_iter().flatten() {
        merged
            .entry(aggregate.date)
            .and_modify(|merged| merged.energy += aggregate.energy)
            .or_insert(aggregate);
    }
    merged.into_values().collect()
}
