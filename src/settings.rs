//! Per-company settings: `<root>/<company>/{time_ranges,prices,groups}.json`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    company::CompanyId,
    groups::MeterGroups,
    prelude::*,
    tariff::{PriceTable, TimeRanges},
};

const TIME_RANGES: &str = "time_ranges.json";
const PRICES: &str = "prices.json";
const GROUPS: &str = "groups.json";

pub struct Settings {
    dir: PathBuf,
}

impl Settings {
    pub fn new(root: &Path, company: &CompanyId) -> Self {
        Self { dir: root.join(company.as_str()) }
    }

    /// The tariff windows are required to classify anything, hence the error on a missing file.
    #[instrument(skip_all, fields(dir = %self.dir.display()))]
    pub fn time_ranges(&self) -> Result<TimeRanges> {
        let path = self.dir.join(TIME_RANGES);
        ensure!(path.is_file(), "`{}` does not exist", path.display());
        read_json(&path)
    }

    /// Missing prices are all zero.
    #[instrument(skip_all, fields(dir = %self.dir.display()))]
    pub fn prices(&self) -> Result<PriceTable> {
        read_json_or_default(&self.dir.join(PRICES))
    }

    #[instrument(skip_all, fields(dir = %self.dir.display()))]
    pub fn groups(&self) -> Result<MeterGroups> {
        read_json_or_default(&self.dir.join(GROUPS))
    }

    #[instrument(skip_all, fields(dir = %self.dir.display()))]
    pub fn save_groups(&self, groups: &MeterGroups) -> Result {
        write_json(&self.dir.join(GROUPS), groups)
    }

    /// Validate and install a new time-range configuration, returning the parsed value.
    #[instrument(skip_all, fields(dir = %self.dir.display(), source = %source.display()))]
    pub fn install_time_ranges(&self, source: &Path) -> Result<TimeRanges> {
        self.install(source, TIME_RANGES)
    }

    /// Validate and install a new price table, returning the parsed value.
    #[instrument(skip_all, fields(dir = %self.dir.display(), source = %source.display()))]
    pub fn install_prices(&self, source: &Path) -> Result<PriceTable> {
        self.install(source, PRICES)
    }

    /// The file is copied verbatim, so that the currency prefixes and formatting are preserved.
    fn install<T: DeserializeOwned>(&self, source: &Path, name: &str) -> Result<T> {
        let contents = fs::read(source)
            .with_context(|| format!("failed to read `{}`", source.display()))?;
        let value = serde_json::from_slice(&contents)
            .with_context(|| format!("`{}` is not a valid `{name}`", source.display()))?;
        let path = self.dir.join(name);
        replace_file(&path, &contents)?;
        info!(path = %path.display(), "installed");
        Ok(value)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "reading…");
    let contents =
        fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    serde_json::from_slice(&contents).with_context(|| format!("failed to parse `{}`", path.display()))
}

fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if path.is_file() {
        read_json(path)
    } else {
        debug!(path = %path.display(), "missing, using the defaults");
        Ok(T::default())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result {
    replace_file(path, &serde_json::to_vec_pretty(value)?)?;
    info!(path = %path.display(), "saved");
    Ok(())
}

/// Write a sibling temporary file and rename it over the target.
///
/// Readers see either the old or the new contents, never a partial file.
fn replace_file(path: &Path, contents: &[u8]) -> Result {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("failed to create `{}`", dir.display()))?;
    }
    let mut temporary = path.as_os_str().to_owned();
    temporary.push(".tmp");
    let temporary = PathBuf::from(temporary);
    fs::write(&temporary, contents)
        .with_context(|| format!("failed to write `{}`", temporary.display()))?;
    if let Err(error) = fs::rename(&temporary, path) {
        let _ = fs::remove_file(&temporary);
        return Err(error).with_context(|| format!("failed to replace `{}`", path.display()));
    }
    Ok(())
}
