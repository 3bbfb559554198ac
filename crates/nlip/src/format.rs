//! Format taxonomy and the case-insensitive comparator

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Closed set of payload categories carried by an envelope or submessage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Token,
    Structured,
    Binary,
    Location,
    Error,
    Generic,
}

impl Format {
    pub const ALL: [Format; 7] = [
        Format::Text,
        Format::Token,
        Format::Structured,
        Format::Binary,
        Format::Location,
        Format::Error,
        Format::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Token => "token",
            Format::Structured => "structured",
            Format::Binary => "binary",
            Format::Location => "location",
            Format::Error => "error",
            Format::Generic => "generic",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    /// Case-insensitive lookup: `"ToKeN"` parses as [`Format::Token`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown format: {}", s))
    }
}

impl<'de> Deserialize<'de> for Format {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// How [`compare`] treats a missing value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Missing matches only missing.
    Exact,
    /// Missing on either side means "don't care" and always matches.
    WildcardOnNull,
}

/// Case-insensitive, null-aware string equality.
///
/// Two present values match when they are equal ignoring case. If either is
/// missing the result depends on `mode`.
pub fn compare(a: Option<&str>, b: Option<&str>, mode: MatchMode) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
        _ if mode == MatchMode::WildcardOnNull => true,
        (None, None) => true,
        _ => false,
    }
}
