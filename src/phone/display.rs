//! Progressive hyphen grouping for the phone field.
//!
//! The display is rebuilt from the full digit string on every keystroke.
//! Digits beyond a country's maximum stay in storage but are not shown.

use super::country::Country;
use super::normalize::strip_to_digits;

/// Group `digits` with hyphens for `country`. Never fails.
///
/// US input of exactly 11 digits starting with `1` is shown as the trailing
/// ten (`15551234567` gives `555-123-4567`) rather than sliced as typed, so
/// the field re-lays out when the eleventh digit arrives (`155-512-3456`
/// becomes `555-123-4567`). Every other length is sliced as typed.
pub fn format_for_display(digits: &str, country: Country) -> String {
    let digits = strip_to_digits(digits);

    match country {
        Country::Us => {
            // 11 digits behind the trunk prefix is an accepted bucket; show the
            // national part
            let national = match digits.strip_prefix('1') {
                Some(rest) if digits.len() == 11 => rest,
                _ => digits.as_str(),
            };
            group(national, &[3, 3, 4])
        }
        Country::Gb => group(&digits, &[4, 3, 4]),
    }
}

/// Same as [`format_for_display`], for a country given as a code.
///
/// Unsupported codes get the bare digits back.
pub fn format_for_display_tag(digits: &str, country: &str) -> String {
    match country.parse::<Country>() {
        Ok(country) => format_for_display(digits, country),
        Err(_) => strip_to_digits(digits),
    }
}

/// Confirmation rendering, e.g. `+1-555-123-4567`
pub fn display_with_calling_code(digits: &str, country: Country) -> String {
    format!(
        "+{}-{}",
        country.calling_code(),
        format_for_display(digits, country)
    )
}

/// Split into at most `sizes.len()` hyphen-separated groups; the last group
/// is capped at its size and the remainder is dropped.
fn group(digits: &str, sizes: &[usize]) -> String {
    let mut groups: Vec<&str> = Vec::with_capacity(sizes.len());
    let mut start = 0;

    for &size in sizes {
        if start >= digits.len() {
            break;
        }
        let end = (start + size).min(digits.len());
        groups.push(&digits[start..end]);
        start = end;
    }

    groups.join("-")
}
