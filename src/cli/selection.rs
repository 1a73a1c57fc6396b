use std::path::Path;

use chrono::NaiveDate;
use clap::Parser;
use reqwest::Url;

use crate::{
    api::meter::{self, Resolution},
    company::CompanyId,
    ops::DateRange,
    prelude::*,
    settings::Settings,
};

#[derive(Parser)]
pub struct CompanyArgs {
    #[clap(long, env = "COMPANY")]
    pub company: CompanyId,
}

impl CompanyArgs {
    pub fn open(&self, root: &Path) -> Settings {
        Settings::new(root, &self.company)
    }
}

#[derive(Parser)]
pub struct MeterApiArgs {
    /// Meter API base URL. For example: `https://iot.example.com/api`.
    #[clap(long = "meter-api-url", env = "METER_API_URL")]
    pub base_url: Url,

    #[clap(long = "meter-api-token", env = "METER_API_TOKEN", hide_env_values = true)]
    pub token: String,

    #[clap(long, env = "RESOLUTION", value_enum, default_value = "hour")]
    pub resolution: Resolution,
}

impl MeterApiArgs {
    pub fn new_client(&self) -> Result<meter::Api> {
        meter::Api::new(self.base_url.clone(), &self.token, self.resolution)
    }
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
pub struct MeterSelectionArgs {
    /// Meter serial numbers.
    #[clap(long = "meter", value_delimiter = ',', num_args = 1..)]
    pub meters: Vec<String>,

    /// Meter group name.
    #[clap(long)]
    pub group: Option<String>,
}

impl MeterSelectionArgs {
    /// Resolve the selection into the serial numbers.
    pub fn serial_numbers(&self, settings: &Settings) -> Result<Vec<String>> {
        let serial_numbers = match &self.group {
            Some(group) => settings.groups()?.get(group)?.to_vec(),
            None => self.meters.clone(),
        };
        ensure!(!serial_numbers.is_empty(), "the selection has no meters");
        Ok(serial_numbers)
    }
}

#[derive(Parser)]
pub struct DateRangeArgs {
    /// First date, inclusive.
    #[clap(long)]
    pub from: NaiveDate,

    /// Last date, inclusive.
    #[clap(long)]
    pub to: NaiveDate,
}

impl DateRangeArgs {
    pub fn range(&self) -> Result<DateRange> {
        DateRange::try_new(self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::groups::MeterGroups;

    fn parse_meter_api(extra: &[&str]) -> Result<MeterApiArgs> {
        let args = [
            "tariffwatch",
            "--meter-api-url",
            "https://iot.example.com/api",
            "--meter-api-token",
            "x",
        ];
        Ok(MeterApiArgs::try_parse_from(args.iter().chain(extra).copied())?)
    }

    #[test]
    fn test_resolution_defaults_to_hourly() -> Result {
        assert!(matches!(parse_meter_api(&[])?.resolution, Resolution::Hourly));
        assert!(matches!(
            parse_meter_api(&["--resolution", "quarter"])?.resolution,
            Resolution::Quarterly
        ));
        assert!(parse_meter_api(&["--resolution", "hourly"]).is_err());
        Ok(())
    }

    #[test]
    fn test_serial_numbers_from_group() -> Result {
        let root = tempdir()?;
        let company: CompanyId = "acme".parse()?;
        let settings = Settings::new(root.path(), &company);
        let mut groups = MeterGroups::default();
        groups.create("office", &["m1".to_owned(), "m2".to_owned()])?;
        groups.create("empty", &[])?;
        settings.save_groups(&groups)?;

        let selection = MeterSelectionArgs { meters: Vec::new(), group: Some("office".to_owned()) };
        assert_eq!(selection.serial_numbers(&settings)?, ["m1", "m2"]);

        let selection = MeterSelectionArgs { meters: Vec::new(), group: Some("empty".to_owned()) };
        assert!(selection.serial_numbers(&settings).is_err());

        let selection = MeterSelectionArgs { meters: Vec::new(), group: Some("plant".to_owned()) };
        assert!(selection.serial_numbers(&settings).is_err());
        Ok(())
    }

    #[test]
    fn test_serial_numbers_from_meters() -> Result {
        let root = tempdir()?;
        let company: CompanyId = "acme".parse()?;
        let settings = Settings::new(root.path(), &company);
        let selection = MeterSelectionArgs { meters: vec!["m3".to_owned()], group: None };
        assert_eq!(selection.serial_numbers(&settings)?, ["m3"]);
        Ok(())
    }
}
