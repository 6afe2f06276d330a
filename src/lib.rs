//! blume - phone setup and workflow executions for a calendar agent
//!
//! Turns free-form phone input into a canonical `+<digits>` number, formats
//! it for display while the user types, and presents the agent's workflow
//! executions with status facets and step approval.
//!
//! # Modules
//!
//! - `phone`: Normalization policies, display formatting, countries
//! - `domain`: Data structures (executions, steps, statuses, calendars, tools)
//! - `core`: Registration flow, execution catalog, calendar connections
//! - `adapters`: Agent gateway trait and the local gateway
//! - `config`: Settings from `.blume/config.yaml` and the environment
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Normalize a number
//! blume phone normalize "(555) 123-4567"
//!
//! # Register the agent's number
//! blume register 07123456789 --country gb
//!
//! # Browse and approve executions
//! blume executions --status waiting-approval
//! blume approve exec-1 step-3
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod phone;

pub use config::Settings;
pub use domain::{ExecutionStatus, StepStatus, WorkflowExecution, WorkflowStep};
pub use phone::{CanonicalPhoneNumber, Country, NormalizePolicy, PhoneError};
