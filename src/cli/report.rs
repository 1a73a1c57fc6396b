use std::path::Path;

use clap::Parser;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    api::meter,
    cli::selection::{CompanyArgs, DateRangeArgs, MeterApiArgs, MeterSelectionArgs},
    core::DailyCost,
    export::{cost_document, usage_document},
    ops::DateRange,
    prelude::*,
    report::Report,
    settings::Settings,
    tables::{build_breakdown_table, build_cost_table, build_readings_table, build_usage_table},
    tariff::TimeRanges,
};

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    company: CompanyArgs,

    #[clap(flatten)]
    meter_api: MeterApiArgs,

    #[clap(flatten)]
    selection: MeterSelectionArgs,

    #[clap(flatten)]
    range: DateRangeArgs,
}

impl ReportArgs {
    fn open(&self, root: &Path) -> Result<Session<'_>> {
        let settings = self.company.open(root);
        let range = self.range.range()?;
        let serial_numbers = self.selection.serial_numbers(&settings)?;
        let time_ranges = settings.time_ranges()?;
        let api = self.meter_api.new_client()?;
        Ok(Session { args: self, settings, api, serial_numbers, time_ranges, range })
    }
}

/// Everything a report needs, loaded once per command.
struct Session<'a> {
    args: &'a ReportArgs,
    settings: Settings,
    api: meter::Api,
    serial_numbers: Vec<String>,
    time_ranges: TimeRanges,
    range: DateRange,
}

impl Session<'_> {
    fn report(&self) -> Report<'_, meter::Api> {
        Report::builder()
            .source(&self.api)
            .company(&self.args.company.company)
            .serial_numbers(&self.serial_numbers)
            .range(self.range)
            .time_ranges(&self.time_ranges)
            .build()
    }
}

fn print_json(document: &impl Serialize) -> Result {
    println!("{}", serde_json::to_string_pretty(document)?);
    Ok(())
}

#[derive(Parser)]
pub struct UsageArgs {
    #[clap(flatten)]
    report: ReportArgs,

    /// Print the JSON document instead of the table.
    #[clap(long)]
    json: bool,
}

impl UsageArgs {
    pub async fn run(self, root: &Path) -> Result {
        let session = self.report.open(root)?;
        let aggregates = session.report().daily_usage().await?;
        if self.json {
            print_json(&usage_document(&aggregates))?;
        } else {
            println!("{}", build_usage_table(&aggregates));
        }
        Ok(())
    }
}

#[derive(Parser)]
pub struct CostArgs {
    #[clap(flatten)]
    report: ReportArgs,

    /// Print the JSON document instead of the table.
    #[clap(long)]
    json: bool,
}

impl CostArgs {
    pub async fn run(self, root: &Path) -> Result {
        let session = self.report.open(root)?;
        let prices = session.settings.prices()?;
        let costs: Vec<DailyCost> = session
            .report()
            .daily_usage()
            .await?
            .iter()
            .map(|aggregate| aggregate.cost(&prices))
            .collect_vec();
        if self.json {
            print_json(&cost_document(&costs))?;
        } else {
            println!("{}", build_cost_table(&costs));
        }
        Ok(())
    }
}

#[derive(Parser)]
pub struct BreakdownArgs {
    #[clap(flatten)]
    report: ReportArgs,
}

impl BreakdownArgs {
    pub async fn run(self, root: &Path) -> Result {
        let session = self.report.open(root)?;
        let breakdown = session.report().breakdown().await?;
        println!("{}", build_breakdown_table(&breakdown.meters, breakdown.total()));
        Ok(())
    }
}

#[derive(Parser)]
pub struct ReadingsArgs {
    #[clap(flatten)]
    report: ReportArgs,
}

impl ReadingsArgs {
    pub async fn run(self, root: &Path) -> Result {
        let session = self.report.open(root)?;
        let readings = session.report().classified_readings().await?;
        info!(n_readings = readings.len(), "classified");
        println!("{}", build_readings_table(&readings));
        Ok(())
    }
}
