use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{ClassifiedReading, DailyAggregate, DailyCost, PeriodTotals},
    groups::MeterGroups,
    quantity::{cost::Cost, energy::KilowattHours},
    tariff::{Period, PriceTable, Season, TimeRanges},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn season_cell(is_summer: bool) -> Cell {
    let season = Season::from_summer(is_summer);
    Cell::new(season).fg(if is_summer { Color::DarkYellow } else { Color::Cyan })
}

fn right(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

pub fn build_usage_table(aggregates: &[DailyAggregate]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Season", "Peak", "Half-peak", "Off-peak", "Total"]);
    for aggregate in aggregates {
        table.add_row(vec![
            Cell::new(aggregate.date.format("%Y-%m-%d %a")),
            season_cell(aggregate.is_summer),
            right(aggregate.energy.peak).fg(Period::Peak.color()),
            right(aggregate.energy.half_peak).fg(Period::HalfPeak.color()),
            right(aggregate.energy.off_peak).fg(Period::OffPeak.color()),
            right(aggregate.energy.total()),
        ]);
    }
    let total: PeriodTotals<KilowattHours> =
        aggregates.iter().map(|aggregate| aggregate.energy).sum();
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        right(total.peak).add_attribute(Attribute::Bold),
        right(total.half_peak).add_attribute(Attribute::Bold),
        right(total.off_peak).add_attribute(Attribute::Bold),
        right(total.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_cost_table(costs: &[DailyCost]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Season", "Peak", "Half-peak", "Off-peak", "Total"]);
    for cost in costs {
        table.add_row(vec![
            Cell::new(cost.date.format("%Y-%m-%d %a")),
            season_cell(cost.is_summer),
            right(cost.cost.peak).fg(Period::Peak.color()),
            right(cost.cost.half_peak).fg(Period::HalfPeak.color()),
            right(cost.cost.off_peak).fg(Period::OffPeak.color()),
            right(cost.total()),
        ]);
    }
    let total: PeriodTotals<Cost> = costs.iter().map(|cost| cost.cost).sum();
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        right(total.peak).add_attribute(Attribute::Bold),
        right(total.half_peak).add_attribute(Attribute::Bold),
        right(total.off_peak).add_attribute(Attribute::Bold),
        right(total.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Per-meter totals over the whole range, followed by the group total.
pub fn build_breakdown_table(
    meters: &[(String, PeriodTotals<KilowattHours>)],
    total: PeriodTotals<KilowattHours>,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Meter", "Peak", "Half-peak", "Off-peak", "Total"]);
    for (serial_number, energy) in meters {
        table.add_row(vec![
            Cell::new(serial_number),
            right(energy.peak),
            right(energy.half_peak),
            right(energy.off_peak),
            right(energy.total()),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        right(total.peak).add_attribute(Attribute::Bold),
        right(total.half_peak).add_attribute(Attribute::Bold),
        right(total.off_peak).add_attribute(Attribute::Bold),
        right(total.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_readings_table(readings: &[ClassifiedReading]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Season", "Day", "Period", "Energy"]);
    for reading in readings {
        let classification = reading.classification;
        table.add_row(vec![
            Cell::new(reading.reading.timestamp.format("%Y-%m-%d %H:%M")),
            season_cell(classification.season.is_summer()),
            Cell::new(classification.day_type).add_attribute(Attribute::Dim),
            Cell::new(classification.period).fg(classification.period.color()),
            right(reading.reading.value),
        ]);
    }
    table
}

pub fn build_groups_table(groups: &MeterGroups) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Group", "Meters"]);
    for (name, meters) in groups.iter() {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(meters.join(", ")),
        ]);
    }
    table
}

pub fn build_time_ranges_table(time_ranges: &TimeRanges) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Season", "Day", "Peak", "Half-peak"]);
    for (season, day_types) in &time_ranges.0 {
        for (day_type, windows) in day_types {
            table.add_row(vec![
                season_cell(season.is_summer()),
                Cell::new(day_type),
                Cell::new(format!("{:?}", windows.peak)).fg(Period::Peak.color()),
                Cell::new(format!("{:?}", windows.half_peak)).fg(Period::HalfPeak.color()),
            ]);
        }
    }
    table
}

pub fn build_prices_table(prices: &PriceTable) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Season", "Peak", "Half-peak", "Off-peak"]);
    for season in [Season::Summer, Season::NonSummer] {
        table.add_row(vec![
            season_cell(season.is_summer()),
            right(prices.price(season, Period::Peak)).fg(Period::Peak.color()),
            right(prices.price(season, Period::HalfPeak)).fg(Period::HalfPeak.color()),
            right(prices.price(season, Period::OffPeak)).fg(Period::OffPeak.color()),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::quantity::zero::Zero;

    #[test]
    fn test_usage_table_has_total_row() {
        let aggregate = DailyAggregate {
            date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            energy: PeriodTotals {
                peak: KilowattHours(8.0),
                half_peak: KilowattHours(7.0),
                off_peak: KilowattHours::ZERO,
            },
            is_summer: true,
        };
        let table = build_usage_table(&[aggregate, aggregate]);
        assert_eq!(table.row_iter().count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("15.00 kWh"), "{rendered}");
        assert!(rendered.contains("30.00 kWh"), "{rendered}");
    }
}
