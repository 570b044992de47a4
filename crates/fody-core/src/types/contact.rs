//! Contact database types.

use crate::FodyError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of an organisation in the contact database
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrgId {
    /// Numeric ID (what the backend normally returns)
    Number(u64),
    /// Textual ID
    Text(String),
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for OrgId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

/// Organisation IDs matched by a contact database search.
///
/// Both lists are required in the response; a missing key is a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgIdList {
    /// Manually maintained organisations
    pub manual: Vec<OrgId>,
    /// Organisations imported automatically
    pub auto: Vec<OrgId>,
}

impl OrgIdList {
    /// Total number of IDs
    #[must_use]
    pub fn len(&self) -> usize {
        self.manual.len() + self.auto.len()
    }

    /// Returns true if the search matched nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.manual.is_empty() && self.auto.is_empty()
    }

    /// Endpoint paths to fetch each organisation, manual first.
    pub fn org_paths(&self) -> impl Iterator<Item = String> + '_ {
        let manual = self.manual.iter().map(|id| format!("org/manual/{id}"));
        let auto = self.auto.iter().map(|id| format!("org/auto/{id}"));
        manual.chain(auto)
    }
}

/// Two or three letter country code accepted by the national search
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Validate a country code
    pub fn new(code: impl Into<String>) -> crate::Result<Self> {
        let code = code.into();
        match code.chars().count() {
            2 | 3 => Ok(Self(code)),
            n => Err(FodyError::invalid_parameter(
                "countrycode",
                format!("expected 2 or 3 characters, got {n}"),
            )),
        }
    }

    /// The code as given
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CountryCode {
    type Err = FodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
