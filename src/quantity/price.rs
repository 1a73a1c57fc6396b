use std::{num::ParseFloatError, str::FromStr};

quantity!(
    /// Price of one kilowatt-hour.
    KilowattHourPrice, via: f64, suffix: "TWD/kWh", precision: 2
);

impl FromStr for KilowattHourPrice {
    type Err = ParseFloatError;

    /// Parse a price, skipping any currency prefix such as `NT$`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let start = s
            .find(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
            .unwrap_or(s.len());
        s[start..].trim().parse().map(Self)
    }
}
