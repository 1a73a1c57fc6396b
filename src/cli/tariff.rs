use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::{
    cli::selection::CompanyArgs,
    prelude::*,
    tables::{build_prices_table, build_time_ranges_table},
};

#[derive(Parser)]
pub struct TariffArgs {
    #[clap(flatten)]
    company: CompanyArgs,

    #[command(subcommand)]
    command: TariffCommand,
}

#[derive(Subcommand)]
enum TariffCommand {
    /// Show the tariff windows and prices.
    Show,

    /// Validate and install the time-range configuration from the file.
    SetTimeRanges { path: PathBuf },

    /// Validate and install the price table from the file.
    SetPrices { path: PathBuf },
}

impl TariffArgs {
    #[instrument(skip_all, fields(company = %self.company.company))]
    pub fn run(self, root: &Path) -> Result {
        let settings = self.company.open(root);
        match self.command {
            TariffCommand::Show => {
                println!("{}", build_time_ranges_table(&settings.time_ranges()?));
                println!("{}", build_prices_table(&settings.prices()?));
            }
            TariffCommand::SetTimeRanges { path } => {
                println!("{}", build_time_ranges_table(&settings.install_time_ranges(&path)?));
            }
            TariffCommand::SetPrices { path } => {
                println!("{}", build_prices_table(&settings.install_prices(&path)?));
            }
        }
        Ok(())
    }
}
