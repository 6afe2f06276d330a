//! Supported dialing regions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A region the phone input can be configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    /// United States (+1)
    #[serde(rename = "US", alias = "us")]
    Us,

    /// United Kingdom (+44)
    #[serde(rename = "GB", alias = "gb", alias = "UK", alias = "uk")]
    Gb,
}

impl Default for Country {
    fn default() -> Self {
        Self::Us
    }
}

impl Country {
    /// Every supported region, in menu order
    pub const ALL: [Country; 2] = [Country::Us, Country::Gb];

    /// ISO 3166 alpha-2 code
    pub fn code(&self) -> &'static str {
        match self {
            Country::Us => "US",
            Country::Gb => "GB",
        }
    }

    /// International calling code, without the `+`
    pub fn calling_code(&self) -> &'static str {
        match self {
            Country::Us => "1",
            Country::Gb => "44",
        }
    }

    /// Short label shown on the country picker
    pub fn label(&self) -> &'static str {
        match self {
            Country::Us => "+1 US",
            Country::Gb => "+44 UK",
        }
    }

    /// Example input shown in an empty phone field
    pub fn placeholder(&self) -> &'static str {
        match self {
            Country::Us => "555-123-4567",
            Country::Gb => "7123-456-789",
        }
    }

    /// Accepted digit counts, for validation messages
    pub fn expected_format(&self) -> &'static str {
        match self {
            Country::Us => "10 digits, or 11 digits starting with 1 (e.g. 555-123-4567)",
            Country::Gb => "10 or 11 digits, optionally with a leading 0 (e.g. 07123 456789)",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a region code is not supported
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported country: {0}")]
pub struct UnknownCountry(pub String);

impl FromStr for Country {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "US" => Ok(Country::Us),
            "GB" | "UK" => Ok(Country::Gb),
            _ => Err(UnknownCountry(s.to_string())),
        }
    }
}
