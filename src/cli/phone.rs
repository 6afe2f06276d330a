//! Phone CLI subcommands for trying the normalizer and formatter.
//!
//! Provides commands to:
//! - `normalize`: Print the canonical number or the validation message
//! - `format`: Print the display grouping for the digits typed
//! - `type`: Replay the input one keystroke at a time

use anyhow::Result;
use clap::Subcommand;

use crate::config::Settings;
use crate::phone::{format_for_display, strip_to_digits, Country, NormalizePolicy};

use super::CountryArg;

/// Phone-related subcommands
#[derive(Subcommand, Debug)]
pub enum PhoneCommands {
    /// Normalize input to a canonical +<digits> number
    Normalize {
        /// Raw input, e.g. "(555) 123-4567"
        raw: String,

        /// Country selector (defaults to the configured country)
        #[arg(short, long, value_enum)]
        country: Option<CountryArg>,

        /// Use the legacy last-10-digits policy
        #[arg(long)]
        lenient: bool,
    },

    /// Show the hyphen grouping for the input
    Format {
        /// Raw input; non-digits are ignored
        raw: String,

        #[arg(short, long, value_enum)]
        country: Option<CountryArg>,
    },

    /// Show the field after every keystroke
    Type {
        /// Raw input; non-digits are ignored
        raw: String,

        #[arg(short, long, value_enum)]
        country: Option<CountryArg>,
    },
}

pub(super) fn execute(command: PhoneCommands, settings: &Settings) -> Result<()> {
    let country_or_default =
        |arg: Option<CountryArg>| arg.map(Country::from).unwrap_or(settings.default_country);

    match command {
        PhoneCommands::Normalize {
            raw,
            country,
            lenient,
        } => {
            let policy = if lenient {
                NormalizePolicy::Lenient
            } else {
                settings.phone_policy
            };
            execute_normalize(&raw, country_or_default(country), policy)
        }
        PhoneCommands::Format { raw, country } => {
            println!("{}", format_for_display(&raw, country_or_default(country)));
            Ok(())
        }
        PhoneCommands::Type { raw, country } => {
            execute_type(&raw, country_or_default(country));
            Ok(())
        }
    }
}

fn execute_normalize(raw: &str, country: Country, policy: NormalizePolicy) -> Result<()> {
    match policy.apply(raw, country) {
        Ok(number) => {
            println!("{}", number);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// Print the display string as each digit is added
fn execute_type(raw: &str, country: Country) {
    let digits = strip_to_digits(raw);

    println!("{:<14} {}", "TYPED", "DISPLAY");
    println!("{}", "-".repeat(32));

    for end in 1..=digits.len() {
        let typed = &digits[..end];
        println!("{:<14} {}", typed, format_for_display(typed, country));
    }

    if digits.is_empty() {
        println!("(empty)        {}", country.placeholder());
    }
}
