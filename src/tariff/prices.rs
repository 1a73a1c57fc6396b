use std::collections::BTreeMap;

use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};

use crate::{
    quantity::{price::KilowattHourPrice, zero::Zero},
    tariff::{Period, Season},
};

/// Prices per season and period, as stored in `prices.json`.
///
/// Prices are usually currency-prefixed strings like `"NT$4.02"`.
/// Missing and unparsable prices resolve to zero.
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PriceTable {
    #[serde_as(as = "BTreeMap<_, DefaultOnError<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default, rename = "peakPrices")]
    pub peak: BTreeMap<Season, KilowattHourPrice>,

    #[serde_as(as = "BTreeMap<_, DefaultOnError<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default, rename = "halfPeakPrices")]
    pub half_peak: BTreeMap<Season, KilowattHourPrice>,

    #[serde_as(as = "BTreeMap<_, DefaultOnError<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default, rename = "offPeakPrices")]
    pub off_peak: BTreeMap<Season, KilowattHourPrice>,
}

impl PriceTable {
    #[must_use]
    pub fn price(&self, season: Season, period: Period) -> KilowattHourPrice {
        let prices = match period {
            Period::Peak => &self.peak,
            Period::HalfPeak => &self.half_peak,
            Period::OffPeak => &self.off_peak,
            Period::Unknown => return KilowattHourPrice::ZERO,
        };
        prices.get(&season).copied().unwrap_or(KilowattHourPrice::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_parse_currency_prefixed_prices() -> Result {
        // language=json
        let json = r#"{
            "peakPrices": { "夏月": "NT$9.39", "非夏月": "NT$9.11" },
            "halfPeakPrices": { "夏月": "NT$5.85", "非夏月": "NT$5.66" },
            "offPeakPrices": { "夏月": "NT$2.53", "非夏月": "NT$2.41" }
        }"#;
        let prices: PriceTable = serde_json::from_str(json)?;
        assert_abs_diff_eq!(prices.price(Season::Summer, Period::Peak).0, 9.39);
        assert_abs_diff_eq!(prices.price(Season::NonSummer, Period::HalfPeak).0, 5.66);
        assert_abs_diff_eq!(prices.price(Season::Summer, Period::OffPeak).0, 2.53);
        Ok(())
    }

    #[test]
    fn test_numeric_prices() -> Result {
        let json = r#"{ "peakPrices": { "夏月": 4.02 } }"#;
        let prices: PriceTable = serde_json::from_str(json)?;
        assert_abs_diff_eq!(prices.price(Season::Summer, Period::Peak).0, 4.02);
        Ok(())
    }

    #[test]
    fn test_missing_and_malformed_prices_are_zero() -> Result {
        let json = r#"{ "peakPrices": { "夏月": "NT$", "非夏月": null }, "offPeakPrices": {} }"#;
        let prices: PriceTable = serde_json::from_str(json)?;
        assert_eq!(prices.price(Season::Summer, Period::Peak), KilowattHourPrice::ZERO);
        assert_eq!(prices.price(Season::NonSummer, Period::Peak), KilowattHourPrice::ZERO);
        assert_eq!(prices.price(Season::Summer, Period::HalfPeak), KilowattHourPrice::ZERO);
        assert_eq!(prices.price(Season::Summer, Period::OffPeak), KilowattHourPrice::ZERO);
        assert_eq!(prices.price(Season::Summer, Period::Unknown), KilowattHourPrice::ZERO);
        Ok(())
    }
}
