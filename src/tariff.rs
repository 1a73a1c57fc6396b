//! Tariff model: seasons, day types, periods and the per-company configuration.

mod day_type;
mod period;
mod prices;
mod season;
mod time_ranges;

pub use self::{
    day_type::DayType,
    period::Period,
    prices::PriceTable,
    season::Season,
    time_ranges::{Classification, TimeRanges},
};
