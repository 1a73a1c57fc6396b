mod group;
mod report;
mod selection;
mod tariff;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        group::GroupArgs,
        report::{BreakdownArgs, CostArgs, ReadingsArgs, UsageArgs},
        tariff::TariffArgs,
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Directory with a settings subdirectory per company.
    #[clap(long = "settings-dir", env = "SETTINGS_DIR", default_value = "settings", global = true)]
    pub settings_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub async fn run(self) -> Result {
        let root = self.settings_dir.as_path();
        match self.command {
            Command::Usage(args) => args.run(root).await,
            Command::Cost(args) => args.run(root).await,
            Command::Breakdown(args) => args.run(root).await,
            Command::Readings(args) => args.run(root).await,
            Command::Group(args) => args.run(root),
            Command::Tariff(args) => args.run(root),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Daily energy per tariff period of the selected meters combined.
    Usage(Box<UsageArgs>),

    /// Daily cost per tariff period of the selected meters combined.
    Cost(Box<CostArgs>),

    /// Energy per tariff period of every selected meter, and their total.
    Breakdown(Box<BreakdownArgs>),

    /// Every reading with its season, day type, and tariff period.
    Readings(Box<ReadingsArgs>),

    /// Manage meter groups.
    Group(Box<GroupArgs>),

    /// Show or replace the tariff configuration.
    Tariff(Box<TariffArgs>),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_usage() {
        let args = Args::try_parse_from([
            "tariffwatch",
            "usage",
            "--company",
            "acme",
            "--meter-api-url",
            "https://iot.example.com/api",
            "--meter-api-token",
            "secret",
            "--meter",
            "m1,m2",
            "--from",
            "2024-07-01",
            "--to",
            "2024-07-31",
            "--json",
        ]);
        assert!(args.is_ok());
    }

    #[test]
    fn test_meters_and_group_are_exclusive() {
        let args = Args::try_parse_from([
            "tariffwatch",
            "readings",
            "--company",
            "acme",
            "--meter-api-url",
            "https://iot.example.com/api",
            "--meter-api-token",
            "secret",
            "--meter",
            "m1",
            "--group",
            "office",
            "--from",
            "2024-07-01",
            "--to",
            "2024-07-31",
        ]);
        assert!(args.is_err());
    }
}
