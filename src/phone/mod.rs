//! Phone number handling for agent setup.
//!
//! - `country`: supported regions and their dialing metadata
//! - `normalize`: raw input to canonical `+<digits>` numbers
//! - `display`: hyphen grouping while the user types
//!
//! Everything here is pure and synchronous.

pub mod country;
pub mod display;
pub mod normalize;

pub use country::{Country, UnknownCountry};
pub use display::{display_with_calling_code, format_for_display, format_for_display_tag};
pub use normalize::{
    normalize, normalize_input, normalize_lenient, strip_to_digits, validate_min_length,
    CanonicalPhoneNumber, NormalizePolicy, PhoneError, PhoneInput, MIN_CANONICAL_LEN,
};
