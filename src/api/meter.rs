//! Client of the IoT meter API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use http::{HeaderMap, HeaderValue, header};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};

use crate::{
    api::{key::parse_key, source::MeterSource},
    company::CompanyId,
    core::Reading,
    ops::DateRange,
    prelude::*,
    quantity::energy::KilowattHours,
};

pub struct Api {
    client: Client,
    base_url: Url,
    resolution: Resolution,
}

impl Api {
    pub fn new(base_url: Url, token: &str, resolution: Resolution) -> Result<Self> {
        ensure!(!base_url.cannot_be_a_base(), "`{base_url}` cannot be used as a base URL");
        let mut headers = HeaderMap::new();
        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("the API token is not a valid header value")?;
        authorization.set_sensitive(true);
        headers.append(header::AUTHORIZATION, authorization);
        let client = Client::builder()
            .user_agent("tariffwatch")
            .timeout(Duration::from_secs(10))
            .default_headers(headers)
            .build()?;
        Ok(Self { client, base_url, resolution })
    }

    fn build_url(&self, company: &CompanyId, serial_number: &str, range: DateRange) -> Result<Url> {
        let query = serde_qs::to_string(&Query {
            company,
            from: range.min,
            to: range.max,
            resolution: self.resolution,
        })?;
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .ok()
            .context("the base URL cannot have path segments")?
            .pop_if_empty()
            .extend(["meters", serial_number, "energy"]);
        url.set_query(Some(&query));
        Ok(url)
    }
}

#[async_trait]
impl MeterSource for Api {
    #[instrument(skip_all, fields(company = %company, serial_number = serial_number, range = ?range))]
    async fn get_readings(
        &self,
        company: &CompanyId,
        serial_number: &str,
        range: DateRange,
    ) -> Result<Vec<Reading>> {
        let url = self.build_url(company, serial_number, range)?;
        info!("fetching…");
        let items = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to request the readings of meter `{serial_number}`"))?
            .error_for_status()
            .with_context(|| format!("the readings request of meter `{serial_number}` failed"))?
            .json::<Response>()
            .await
            .with_context(|| format!("failed to deserialize the readings of `{serial_number}`"))?
            .into_items();
        info!(n_items = items.len(), "fetched");
        Ok(into_readings(items, range))
    }
}

/// Convert the raw items, skipping those with bad keys or values, or outside the range.
fn into_readings(items: Vec<Item>, range: DateRange) -> Vec<Reading> {
    items
        .into_iter()
        .filter_map(|item| {
            let Some(timestamp) = parse_key(&item.key, range) else {
                warn!(key = %item.key, "skipping the reading with an unrecognized key");
                return None;
            };
            let Some(value) = item.value.filter(|value| value.is_finite()) else {
                warn!(key = %item.key, "skipping the reading without a valid value");
                return None;
            };
            if !range.contains(timestamp.date()) {
                debug!(%timestamp, "skipping the reading outside the range");
                return None;
            }
            Some(Reading::new(timestamp, KilowattHours(value)))
        })
        .collect()
}

#[derive(Copy, Clone, Debug, Default, Serialize, clap::ValueEnum)]
pub enum Resolution {
    #[default]
    #[serde(rename = "hour")]
    #[value(name = "hour")]
    Hourly,

    #[serde(rename = "quarter")]
    #[value(name = "quarter")]
    Quarterly,
}

#[derive(Serialize)]
struct Query<'a> {
    company: &'a CompanyId,
    from: NaiveDate,
    to: NaiveDate,
    resolution: Resolution,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Response {
    Bare(Vec<Item>),
    Wrapped { data: Vec<Item> },
}

impl Response {
    fn into_items(self) -> Vec<Item> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

#[serde_as]
#[derive(Deserialize)]
struct Item {
    #[serde(rename = "Key")]
    key: String,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default, rename = "Value")]
    value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn july() -> Result<DateRange> {
        DateRange::try_new(
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 31).unwrap(),
        )
    }

    #[test]
    fn test_hourly_response_ok() -> Result {
        // language=json
        let body = r#"[
            { "Key": "07/15 10:00", "Value": 5 },
            { "Key": "07/15 17:00", "Value": 8.25 },
            { "Key": "07/15 23:00", "Value": "2" }
        ]"#;
        let readings = into_readings(serde_json::from_str::<Response>(body)?.into_items(), july()?);
        assert_eq!(readings.len(), 3);
        assert_eq!(readings[1].timestamp.to_string(), "2024-07-15 17:00:00");
        assert_abs_diff_eq!(readings[1].value.0, 8.25);
        assert_abs_diff_eq!(readings[2].value.0, 2.0);
        Ok(())
    }

    #[test]
    fn test_wrapped_quarterly_response_ok() -> Result {
        // language=json
        let body = r#"{ "data": [
            { "Key": "2024/07/15 17:15", "Value": 0.5 },
            { "Key": "2024/07/15 17:30", "Value": 0.75 }
        ] }"#;
        let readings = into_readings(serde_json::from_str::<Response>(body)?.into_items(), july()?);
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].timestamp.to_string(), "2024-07-15 17:15:00");
        Ok(())
    }

    #[test]
    fn test_bad_items_are_skipped() -> Result {
        // language=json
        let body = r#"[
            { "Key": "not a key", "Value": 1 },
            { "Key": "07/15 10:00", "Value": null },
            { "Key": "07/15 11:00", "Value": "n/a" },
            { "Key": "07/15 12:00" },
            { "Key": "2024/08/01 00:00", "Value": 1 },
            { "Key": "07/15 13:00", "Value": 1.5 }
        ]"#;
        let readings = into_readings(serde_json::from_str::<Response>(body)?.into_items(), july()?);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].timestamp.to_string(), "2024-07-15 13:00:00");
        Ok(())
    }

    #[test]
    fn test_build_url() -> Result {
        let api = Api::new("https://iot.example.com/api/".parse::<Url>()?, "secret", Resolution::Hourly)?;
        let url = api.build_url(&"acme".parse::<CompanyId>()?, "AB 12", july()?)?;
        assert_eq!(
            url.as_str(),
            "https://iot.example.com/api/meters/AB%2012/energy?company=acme&from=2024-07-01&to=2024-07-31&resolution=hour"
        );
        Ok(())
    }

    #[tokio::test]
    #[ignore = "makes the API request"]
    async fn test_get_readings_ok() -> Result {
        let base_url: Url = std::env::var("METER_API_URL")?.parse()?;
        let token = std::env::var("METER_API_TOKEN")?;
        let company: CompanyId = std::env::var("COMPANY")?.parse()?;
        let serial_number = std::env::var("METER_SERIAL_NUMBER")?;
        let readings = Api::new(base_url, &token, Resolution::Hourly)?
            .get_readings(&company, &serial_number, july()?)
            .await?;
        assert!(readings.is_sorted_by_key(|reading| reading.timestamp));
        Ok(())
    }
}
