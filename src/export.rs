//! JSON documents of the daily reports.
//!
//! Totals stay numeric until here, and only here are they formatted with two decimals.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::core::{DailyAggregate, DailyCost};

#[derive(Serialize)]
pub struct UsageEntry {
    #[serde(serialize_with = "serialize_hundredths")]
    peak: f64,

    #[serde(rename = "halfpeak", serialize_with = "serialize_hundredths")]
    half_peak: f64,

    #[serde(rename = "offpeak", serialize_with = "serialize_hundredths")]
    off_peak: f64,

    #[serde(rename = "isSummer")]
    is_summer: bool,
}

impl From<&DailyAggregate> for UsageEntry {
    fn from(aggregate: &DailyAggregate) -> Self {
        Self {
            peak: aggregate.energy.peak.0,
            half_peak: aggregate.energy.half_peak.0,
            off_peak: aggregate.energy.off_peak.0,
            is_summer: aggregate.is_summer,
        }
    }
}

#[derive(Serialize)]
pub struct CostEntry {
    #[serde(serialize_with = "serialize_hundredths")]
    peak: f64,

    #[serde(rename = "halfpeak", serialize_with = "serialize_hundredths")]
    half_peak: f64,

    #[serde(rename = "offpeak", serialize_with = "serialize_hundredths")]
    off_peak: f64,

    #[serde(serialize_with = "serialize_hundredths")]
    total: f64,

    #[serde(rename = "isSummer")]
    is_summer: bool,
}

impl From<&DailyCost> for CostEntry {
    fn from(cost: &DailyCost) -> Self {
        Self {
            peak: cost.cost.peak.0,
            half_peak: cost.cost.half_peak.0,
            off_peak: cost.cost.off_peak.0,
            total: cost.total().0,
            is_summer: cost.is_summer,
        }
    }
}

#[must_use]
pub fn usage_document(aggregates: &[DailyAggregate]) -> BTreeMap<NaiveDate, UsageEntry> {
    aggregates.iter().map(|aggregate| (aggregate.date, aggregate.into())).collect()
}

#[must_use]
pub fn cost_document(costs: &[DailyCost]) -> BTreeMap<NaiveDate, CostEntry> {
    costs.iter().map(|cost| (cost.date, cost.into())).collect()
}

#[expect(clippy::trivially_copy_pass_by_ref)]
fn serialize_hundredths<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{value:.2}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        core::PeriodTotals,
        prelude::*,
        quantity::{cost::Cost, energy::KilowattHours},
    };

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    #[test]
    fn test_usage_document() -> Result {
        let aggregate = DailyAggregate {
            date: date(),
            energy: PeriodTotals {
                peak: KilowattHours(8.0),
                half_peak: KilowattHours(7.0),
                off_peak: KilowattHours(0.0),
            },
            is_summer: true,
        };
        let document = serde_json::to_value(usage_document(&[aggregate]))?;
        assert_eq!(
            document,
            json!({
                "2024-07-15": { "peak": "8.00", "halfpeak": "7.00", "offpeak": "0.00", "isSummer": true }
            })
        );
        Ok(())
    }

    #[test]
    fn test_cost_document_rounds_only_at_the_end() -> Result {
        let cost = DailyCost {
            date: date(),
            cost: PeriodTotals { peak: Cost(1.004), half_peak: Cost(1.004), off_peak: Cost(1.004) },
            is_summer: false,
        };
        let document = serde_json::to_value(cost_document(&[cost]))?;
        assert_eq!(
            document,
            json!({
                "2024-07-15": {
                    "peak": "1.00",
                    "halfpeak": "1.00",
                    "offpeak": "1.00",
                    "total": "3.01",
                    "isSummer": false
                }
            })
        );
        Ok(())
    }
}
