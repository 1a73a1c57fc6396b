use std::fmt::{Display, Formatter};

use comfy_table::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    Peak,
    HalfPeak,
    OffPeak,

    /// The time-range configuration has no entry for the season and day type.
    Unknown,
}

impl Period {
    pub const fn color(self) -> Color {
        match self {
            Self::Peak => Color::Red,
            Self::HalfPeak => Color::DarkYellow,
            Self::OffPeak => Color::Green,
            Self::Unknown => Color::Magenta,
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Peak => write!(f, "peak"),
            Self::HalfPeak => write!(f, "half-peak"),
            Self::OffPeak => write!(f, "off-peak"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
