//! Domain types for blume.
//!
//! - Calendar: calendar accounts and agent-created events
//! - Execution: workflow runs and their ordered steps
//! - Status: execution/step statuses and their presentation facets
//! - Duration: human-readable run lengths
//! - Tools: typed tool configuration

pub mod calendar;
pub mod duration;
pub mod execution;
pub mod status;
pub mod tools;

// Re-export commonly used types
pub use calendar::{CalendarAccount, CalendarError, CalendarEvent, CalendarProvider};
pub use duration::{format_duration, format_duration_ms};
pub use execution::{ApprovalError, StepKind, WorkflowExecution, WorkflowStep};
pub use status::{
    dot_color_for_tag, intent_for_tag, to_dot_color, to_intent, DotColor, ExecutionStatus,
    Intent, StatusPresentation, StepStatus, UnknownStatus,
};
pub use tools::{GoogleCalendarConfig, ToolConfig, ToolConfigError, ToolKind};
