//! Tariff classification and aggregation over already-fetched readings.

pub mod aggregate;
pub mod classify;
pub mod group;
pub mod merge;
pub mod reading;

pub use self::{
    aggregate::{DailyAggregate, DailyCost, PeriodTotals, aggregate_daily},
    classify::classify_all,
    group::group_by_date,
    merge::{merge_daily, merge_readings},
    reading::{ClassifiedReading, Reading},
};
