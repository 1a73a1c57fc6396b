use std::fmt::{Display, Formatter};

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayType {
    /// Monday through Friday.
    #[serde(rename = "weekdays")]
    Weekday,

    #[serde(rename = "saturday")]
    Saturday,

    #[serde(rename = "sunday")]
    Sunday,
}

impl DayType {
    pub fn of(date: &impl Datelike) -> Self {
        match date.weekday() {
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
                Self::Weekday
            }
        }
    }
}

impl Display for DayType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekday => write!(f, "weekday"),
            Self::Saturday => write!(f, "saturday"),
            Self::Sunday => write!(f, "sunday"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_of_date() {
        // 2024-07-15 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        let expected = [
            DayType::Weekday,
            DayType::Weekday,
            DayType::Weekday,
            DayType::Weekday,
            DayType::Weekday,
            DayType::Saturday,
            DayType::Sunday,
        ];
        for (date, expected) in monday.iter_days().zip(expected) {
            assert_eq!(DayType::of(&date), expected, "{date}");
        }
    }
}
