//! Normalization of user-typed phone numbers into canonical `+<digits>` form.
//!
//! Two policies exist:
//! - **Strict** (default): per-country digit buckets, anything else is an
//!   [`PhoneError::InvalidLength`].
//! - **Lenient** (legacy): country-agnostic, keeps the trailing 10 digits
//!   behind `+1` and passes short input through untouched. The result must
//!   still clear [`validate_min_length`] before it is used.
//!
//! Neither policy checks real numbering plans.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::country::Country;

/// Minimum length of an accepted number, counting the `+`
pub const MIN_CANONICAL_LEN: usize = 10;

/// Digits kept by the lenient policy
const LENIENT_NATIONAL_DIGITS: usize = 10;

/// Errors produced while normalizing phone input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Please enter a phone number.")]
    Empty,

    #[error("{}", invalid_length_message(.country, .digits))]
    InvalidLength {
        /// Country the input was checked against (`None` in lenient mode)
        country: Option<Country>,
        /// Number of digits that were supplied
        digits: usize,
    },
}

fn invalid_length_message(country: &Option<Country>, digits: &usize) -> String {
    match country {
        Some(country) => format!(
            "That doesn't look like a valid number for {} ({} digits given). Expected {}.",
            country,
            digits,
            country.expected_format()
        ),
        None => format!(
            "That doesn't look like a valid phone number ({} digits given). Expected a + followed by at least {} digits.",
            digits,
            MIN_CANONICAL_LEN - 1
        ),
    }
}

/// A phone number in `+<calling code><national number>` form.
///
/// Only the normalizers in this module construct it, so holding one means the
/// value passed the selected policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalPhoneNumber(String);

impl CanonicalPhoneNumber {
    fn from_digits(digits: &str) -> Self {
        Self(format!("+{}", digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits after the `+`
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Raw field state: the digits typed so far plus whether a leading `+` was
/// present before stripping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneInput {
    digits: String,
    international: bool,
}

impl PhoneInput {
    /// Capture free-form input, remembering a leading `+`
    pub fn parse(raw: &str) -> Self {
        Self {
            digits: strip_to_digits(raw),
            international: raw.trim_start().starts_with('+'),
        }
    }

    /// Input that is known to be national (no `+` typed)
    pub fn national(digits: &str) -> Self {
        Self {
            digits: strip_to_digits(digits),
            international: false,
        }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn is_international(&self) -> bool {
        self.international
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

/// Remove every character that is not an ASCII decimal digit
pub fn strip_to_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize national digits for `country` under the strict policy
pub fn normalize(digits: &str, country: Country) -> Result<CanonicalPhoneNumber, PhoneError> {
    normalize_input(&PhoneInput::national(digits), country)
}

/// Normalize captured input for `country` under the strict policy.
///
/// International input (typed with a leading `+`) is kept as typed.
pub fn normalize_input(
    input: &PhoneInput,
    country: Country,
) -> Result<CanonicalPhoneNumber, PhoneError> {
    let digits = input.digits();
    let invalid = || PhoneError::InvalidLength {
        country: Some(country),
        digits: digits.len(),
    };

    if input.is_international() {
        if digits.is_empty() {
            return Err(invalid());
        }
        return Ok(CanonicalPhoneNumber::from_digits(digits));
    }

    match country {
        Country::Us => match digits.len() {
            10 => Ok(CanonicalPhoneNumber::from_digits(&format!("1{}", digits))),
            11 if digits.starts_with('1') => Ok(CanonicalPhoneNumber::from_digits(digits)),
            _ => Err(invalid()),
        },
        Country::Gb => match digits.len() {
            10 | 11 => {
                let national = digits.strip_prefix('0').unwrap_or(digits);
                Ok(CanonicalPhoneNumber::from_digits(&format!("44{}", national)))
            }
            _ => Err(invalid()),
        },
    }
}

/// Legacy best-effort normalization.
///
/// Ten or more digits: the trailing ten behind `+1`. Fewer: the original input
/// is returned unchanged, which [`validate_min_length`] will then reject.
pub fn normalize_lenient(input: &str) -> String {
    let digits = strip_to_digits(input);
    if digits.len() < LENIENT_NATIONAL_DIGITS {
        return input.to_string();
    }
    let national = &digits[digits.len() - LENIENT_NATIONAL_DIGITS..];
    format!("+1{}", national)
}

/// Call-site check applied to lenient results
pub fn validate_min_length(candidate: &str) -> Result<CanonicalPhoneNumber, PhoneError> {
    let digits = candidate.strip_prefix('+').unwrap_or("");
    let well_formed = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());

    if !well_formed || candidate.len() < MIN_CANONICAL_LEN {
        return Err(PhoneError::InvalidLength {
            country: None,
            digits: strip_to_digits(candidate).len(),
        });
    }

    Ok(CanonicalPhoneNumber::from_digits(digits))
}

/// Which normalization policy a submit path uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizePolicy {
    /// Per-country buckets with hard failures
    #[default]
    Strict,

    /// Country-agnostic last-10-digits rule (deprecated)
    Lenient,
}

impl NormalizePolicy {
    /// Turn raw field text into a canonical number, or explain why not
    pub fn apply(&self, raw: &str, country: Country) -> Result<CanonicalPhoneNumber, PhoneError> {
        if raw.trim().is_empty() {
            return Err(PhoneError::Empty);
        }

        match self {
            NormalizePolicy::Strict => normalize_input(&PhoneInput::parse(raw), country),
            NormalizePolicy::Lenient => validate_min_length(&normalize_lenient(raw)),
        }
    }
}

impl FromStr for NormalizePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(NormalizePolicy::Strict),
            "lenient" => Ok(NormalizePolicy::Lenient),
            other => Err(format!("Unknown phone policy: {}", other)),
        }
    }
}
