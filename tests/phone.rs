//! Phone Input Integration Tests
//!
//! Normalization, display grouping and the keystroke flow of the phone field.

use blume::phone::{
    format_for_display, format_for_display_tag, strip_to_digits, Country, NormalizePolicy,
    PhoneError,
};

fn strict(raw: &str, country: Country) -> Result<String, PhoneError> {
    NormalizePolicy::Strict
        .apply(raw, country)
        .map(|n| n.as_str().to_string())
}

#[test]
fn test_strip_to_digits_is_idempotent() {
    for raw in ["(555) 123-4567", "+44 7123 456789", "abc", "", "１２３"] {
        let once = strip_to_digits(raw);
        assert_eq!(strip_to_digits(&once), once);
        assert!(once.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_us_numbers() {
    assert_eq!(strict("555-123-4567", Country::Us).unwrap(), "+15551234567");
    assert_eq!(strict("1-555-123-4567", Country::Us).unwrap(), "+15551234567");

    match strict("123", Country::Us) {
        Err(PhoneError::InvalidLength { country, digits }) => {
            assert_eq!(country, Some(Country::Us));
            assert_eq!(digits, 3);
        }
        other => panic!("Expected InvalidLength, got {:?}", other),
    }
}

#[test]
fn test_gb_numbers() {
    assert_eq!(strict("07123456789", Country::Gb).unwrap(), "+447123456789");
    assert_eq!(strict("7123456789", Country::Gb).unwrap(), "+447123456789");
    assert!(strict("0712345", Country::Gb).is_err());
}

#[test]
fn test_blank_input_is_empty_error() {
    assert_eq!(strict("   ", Country::Us), Err(PhoneError::Empty));
    assert_eq!(
        NormalizePolicy::Lenient.apply("", Country::Us),
        Err(PhoneError::Empty)
    );
}

#[test]
fn test_canonical_numbers_are_plus_then_digits() {
    let inputs = [
        ("5551234567", Country::Us),
        ("1 555 123 4567", Country::Us),
        ("07123 456789", Country::Gb),
        ("+33 6 12 34 56 78", Country::Gb),
    ];

    for policy in [NormalizePolicy::Strict, NormalizePolicy::Lenient] {
        for (raw, country) in inputs {
            let number = policy.apply(raw, country).unwrap();
            let rest = number.as_str().strip_prefix('+').unwrap();
            assert!(!rest.is_empty());
            assert!(rest.chars().all(|c| c.is_ascii_digit()), "{}", number);
        }
    }
}

#[test]
fn test_lenient_keeps_last_ten_digits() {
    let number = NormalizePolicy::Lenient
        .apply("07123456789", Country::Gb)
        .unwrap();
    assert_eq!(number.as_str(), "+17123456789");

    assert!(NormalizePolicy::Lenient.apply("12345", Country::Us).is_err());
}

#[test]
fn test_display_grouping() {
    assert_eq!(format_for_display("", Country::Us), "");
    assert_eq!(format_for_display("5551234567", Country::Us), "555-123-4567");
    assert_eq!(format_for_display("71234567891", Country::Gb), "7123-456-7891");
    assert_eq!(format_for_display_tag("5551234567", "FR"), "5551234567");
}

#[test]
fn test_overlong_input_is_truncated_in_display_only() {
    let typed = "555123456789";
    assert_eq!(format_for_display(typed, Country::Us), "555-123-4567");
    assert!(strict(typed, Country::Us).is_err());
}

#[test]
fn test_us_keystroke_scenario() {
    let typed = "15551234567";
    let shown: Vec<String> = (1..=typed.len())
        .map(|end| format_for_display(&typed[..end], Country::Us))
        .collect();

    assert_eq!(shown[0], "1");
    assert_eq!(shown[3], "155-5");
    assert_eq!(shown[9], "155-512-3456");
    assert_eq!(shown.last().unwrap(), "555-123-4567");

    assert_eq!(strict(typed, Country::Us).unwrap(), "+15551234567");
}
