use std::fmt::{Display, Formatter};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    /// June through September.
    #[serde(rename = "夏月")]
    Summer,

    #[serde(rename = "非夏月")]
    NonSummer,
}

impl Season {
    pub const fn from_month(month: u32) -> Self {
        if matches!(month, 6..=9) { Self::Summer } else { Self::NonSummer }
    }

    pub fn of(date: &impl Datelike) -> Self {
        Self::from_month(date.month())
    }

    #[must_use]
    pub const fn is_summer(self) -> bool {
        matches!(self, Self::Summer)
    }

    pub const fn from_summer(is_summer: bool) -> Self {
        if is_summer { Self::Summer } else { Self::NonSummer }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summer => write!(f, "summer"),
            Self::NonSummer => write!(f, "non-summer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_summer_months() {
        for month in 1..=12 {
            assert_eq!(
                Season::from_month(month).is_summer(),
                (6..=9).contains(&month),
                "month {month}"
            );
        }
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
        assert_eq!(Season::of(&date), Season::Summer);
        let date = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        assert_eq!(Season::of(&date), Season::NonSummer);
    }

    #[test]
    fn test_serde_keys() -> Result {
        assert_eq!(serde_json::to_string(&Season::Summer)?, r#""夏月""#);
        assert_eq!(serde_json::from_str::<Season>(r#""非夏月""#)?, Season::NonSummer);
        Ok(())
    }
}
