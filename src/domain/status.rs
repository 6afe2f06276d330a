//! Execution and step statuses, and how they are presented.
//!
//! Each status maps to two independent facets: a [`DotColor`] for the small
//! traffic-light indicator and an [`Intent`] for the badge around the label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status of a workflow execution, as reported by the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    /// Currently executing
    Running,

    /// Completed successfully
    Succeeded,

    /// Failed
    Failed,

    /// Held until a human approves a step
    WaitingApproval,
}

/// Status of a single step within an execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Not yet started
    Pending,

    /// Currently executing
    Running,

    /// Completed successfully
    Succeeded,

    /// Failed
    Failed,

    /// Needs a human to approve it
    WaitingApproval,
}

impl Default for StepStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl ExecutionStatus {
    pub const ALL: [ExecutionStatus; 4] = [
        ExecutionStatus::Running,
        ExecutionStatus::Succeeded,
        ExecutionStatus::Failed,
        ExecutionStatus::WaitingApproval,
    ];

    /// Wire tag, e.g. `waiting_approval`
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Running => "running",
            ExecutionStatus::Succeeded => "succeeded",
            ExecutionStatus::Failed => "failed",
            ExecutionStatus::WaitingApproval => "waiting_approval",
        }
    }

    /// Whether the execution has stopped for good
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExecutionStatus::Succeeded | ExecutionStatus::Failed)
    }
}

impl StepStatus {
    pub const ALL: [StepStatus; 5] = [
        StepStatus::Pending,
        StepStatus::Running,
        StepStatus::Succeeded,
        StepStatus::Failed,
        StepStatus::WaitingApproval,
    ];

    /// Wire tag, e.g. `waiting_approval`
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Running => "running",
            StepStatus::Succeeded => "succeeded",
            StepStatus::Failed => "failed",
            StepStatus::WaitingApproval => "waiting_approval",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status tag that is not part of the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ExecutionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExecutionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl FromStr for StepStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Colour of the status dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DotColor {
    /// Animated, work in flight
    Running,
    Pending,
    Success,
    Error,
}

/// Severity used to style a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    #[default]
    Default,
    Success,
    Warning,
    Error,
}

impl DotColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            DotColor::Running => "running",
            DotColor::Pending => "pending",
            DotColor::Success => "success",
            DotColor::Error => "error",
        }
    }
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Default => "default",
            Intent::Success => "success",
            Intent::Warning => "warning",
            Intent::Error => "error",
        }
    }
}

impl fmt::Display for DotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation facets of a status
pub trait StatusPresentation {
    fn dot_color(&self) -> DotColor;
    fn intent(&self) -> Intent;
}

impl StatusPresentation for ExecutionStatus {
    fn dot_color(&self) -> DotColor {
        match self {
            ExecutionStatus::Running => DotColor::Running,
            ExecutionStatus::Succeeded => DotColor::Success,
            ExecutionStatus::Failed => DotColor::Error,
            ExecutionStatus::WaitingApproval => DotColor::Pending,
        }
    }

    fn intent(&self) -> Intent {
        match self {
            ExecutionStatus::Succeeded => Intent::Success,
            ExecutionStatus::Failed => Intent::Error,
            ExecutionStatus::WaitingApproval => Intent::Warning,
            ExecutionStatus::Running => Intent::Default,
        }
    }
}

impl StatusPresentation for StepStatus {
    fn dot_color(&self) -> DotColor {
        match self {
            StepStatus::Running => DotColor::Running,
            StepStatus::Succeeded => DotColor::Success,
            StepStatus::Failed => DotColor::Error,
            StepStatus::WaitingApproval | StepStatus::Pending => DotColor::Pending,
        }
    }

    fn intent(&self) -> Intent {
        match self {
            StepStatus::Succeeded => Intent::Success,
            StepStatus::Failed => Intent::Error,
            StepStatus::WaitingApproval => Intent::Warning,
            StepStatus::Running | StepStatus::Pending => Intent::Default,
        }
    }
}

pub fn to_dot_color<S: StatusPresentation>(status: &S) -> DotColor {
    status.dot_color()
}

pub fn to_intent<S: StatusPresentation>(status: &S) -> Intent {
    status.intent()
}

/// Dot colour for a raw status tag; unrecognized tags are `pending`
pub fn dot_color_for_tag(tag: &str) -> DotColor {
    tag.parse::<StepStatus>()
        .map(|status| status.dot_color())
        .unwrap_or(DotColor::Pending)
}

/// Intent for a raw status tag; unrecognized tags are `default`
pub fn intent_for_tag(tag: &str) -> Intent {
    tag.parse::<StepStatus>()
        .map(|status| status.intent())
        .unwrap_or(Intent::Default)
}
