use itertools::Itertools;

use crate::{
    core::{ClassifiedReading, Reading},
    prelude::*,
    tariff::{Period, TimeRanges},
};

/// Classify every reading, warning about the season and day types missing from the configuration.
pub fn classify_all(
    readings: impl IntoIterator<Item = Reading>,
    time_ranges: &TimeRanges,
) -> Vec<ClassifiedReading> {
    let classified = readings
        .into_iter()
        .map(|reading| ClassifiedReading {
            reading,
            classification: time_ranges.classify(reading.timestamp),
        })
        .collect_vec();
    let unknown = classified
        .iter()
        .filter(|reading| reading.classification.period == Period::Unknown)
        .counts_by(|reading| (reading.classification.season, reading.classification.day_type));
    for ((season, day_type), n_readings) in unknown.into_iter().sorted() {
        warn!(
            %season,
            %day_type,
            n_readings,
            "no time ranges configured, readings are excluded from the totals"
        );
    }
    classified
}
