use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::prelude::*;

/// Tenant company identifier.
///
/// Doubles as the name of the company settings directory, hence the restrictions.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CompanyId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        ensure!(!s.is_empty(), "company identifier is empty");
        ensure!(s != "." && s != "..", "`{s}` is not a valid company identifier");
        ensure!(
            !s.contains(['/', '\\']) && !s.chars().any(char::is_control),
            "company identifier `{s}` contains forbidden characters"
        );
        Ok(Self(s.to_owned()))
    }
}

impl Display for CompanyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
