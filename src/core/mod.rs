//! Application services.
//!
//! This module contains:
//! - Registration: phone setup flow against an agent gateway
//! - Catalog: execution search, lookup, approval and the data-source seam
//! - Calendars: calendar connection state behind the `CalendarSource` seam
//! - Fixtures: demo executions and calendar accounts

pub mod calendars;
pub mod catalog;
pub mod fixtures;
pub mod registration;

// Re-export commonly used types
pub use calendars::{CalendarSource, FixtureCalendars};
pub use catalog::{ExecutionCatalog, ExecutionSource, FixtureSource};
pub use fixtures::{demo_calendars, demo_executions};
pub use registration::{PhoneRegistration, RegistrationOutcome, DEFAULT_AGENT_NAME};
