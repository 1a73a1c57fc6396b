use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::core::ClassifiedReading;

/// Bucket the readings by calendar date.
///
/// Dates are ordered, and the readings within a bucket keep their original order.
pub fn group_by_date(
    readings: impl IntoIterator<Item = ClassifiedReading>,
) -> BTreeMap<NaiveDate, Vec<ClassifiedReading>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<ClassifiedReading>> = BTreeMap::new();
    for reading in readings {
        buckets.entry(reading.reading.date()).or_default().push(reading);
    }
    buckets
}
