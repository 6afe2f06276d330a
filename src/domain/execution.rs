//! Workflow executions and their steps.
//!
//! An execution is one run of an agent workflow. It owns its steps in
//! execution order. Its own status comes from the data source and is never
//! derived from the steps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::duration::format_duration;
use super::status::{ExecutionStatus, StepStatus};

/// One run of an agent workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowExecution {
    /// Identifier assigned by the data source
    pub id: String,

    /// Short description of what the run does
    pub name: String,

    /// Agent that performed the run
    pub agent_name: String,

    /// Status reported by the data source
    pub status: ExecutionStatus,

    /// Steps in execution order
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished (if it has)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// What set the run off, e.g. an inbound SMS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_description: Option<String>,

    /// Calendar the run acted on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_calendar: Option<String>,
}

/// One unit of work within an execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub status: StepStatus,

    /// When the step last changed state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub kind: StepKind,
}

/// What kind of work a step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    #[default]
    Task,

    /// Gate that a human confirms
    Approval,

    /// Bookkeeping done by the platform
    System,
}

/// Reasons a step approval is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApprovalError {
    #[error("Execution not found: {0}")]
    ExecutionNotFound(String),

    #[error("Step {step_id} not found in execution {execution_id}")]
    StepNotFound {
        execution_id: String,
        step_id: String,
    },

    #[error("Step {step_id} is not awaiting approval (status: {status})")]
    NotAwaitingApproval { step_id: String, status: StepStatus },
}

impl WorkflowStep {
    /// Create a task step with no timestamp
    pub fn new(id: impl Into<String>, label: impl Into<String>, status: StepStatus) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            status,
            timestamp: None,
            kind: StepKind::Task,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_kind(mut self, kind: StepKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Whether the approval gesture is shown for this step
    pub fn can_confirm(&self) -> bool {
        self.kind == StepKind::Approval
    }

    /// Whether the approval gesture is enabled right now
    pub fn is_awaiting_approval(&self) -> bool {
        self.can_confirm() && self.status == StepStatus::WaitingApproval
    }

    /// Whether the step has been approved
    pub fn is_confirmed(&self) -> bool {
        self.status == StepStatus::Succeeded
    }
}

impl WorkflowExecution {
    /// Create a running execution with no steps
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        agent_name: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            agent_name: agent_name.into(),
            status: ExecutionStatus::Running,
            steps: Vec::new(),
            started_at,
            completed_at: None,
            trigger_description: None,
            target_calendar: None,
        }
    }

    pub fn with_status(mut self, status: ExecutionStatus) -> Self {
        self.status = status;
        self
    }

    /// Append a step; order of calls is execution order
    pub fn with_step(mut self, step: WorkflowStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger_description = Some(trigger.into());
        self
    }

    pub fn with_target_calendar(mut self, calendar: impl Into<String>) -> Self {
        self.target_calendar = Some(calendar.into());
        self
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, step_id: &str) -> Option<&WorkflowStep> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    /// Elapsed time, up to `now` for unfinished runs
    pub fn duration_human(&self, now: DateTime<Utc>) -> String {
        let end = self.completed_at.unwrap_or(now);
        format_duration(end - self.started_at)
    }

    /// Case-insensitive substring match over name, agent, status and id.
    /// A blank query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
            || self.agent_name.to_lowercase().contains(&query)
            || self.status.as_str().contains(&query)
            || self.id.to_lowercase().contains(&query)
    }

    /// Approve a step that is waiting on a human.
    ///
    /// The step becomes `succeeded` and is stamped with `at`. The execution's
    /// own status is left to the data source.
    pub fn approve_step(
        &mut self,
        step_id: &str,
        at: DateTime<Utc>,
    ) -> Result<&WorkflowStep, ApprovalError> {
        let execution_id = self.id.clone();
        let step = self
            .steps
            .iter_mut()
            .find(|s| s.id == step_id)
            .ok_or_else(|| ApprovalError::StepNotFound {
                execution_id,
                step_id: step_id.to_string(),
            })?;

        if !step.is_awaiting_approval() {
            return Err(ApprovalError::NotAwaitingApproval {
                step_id: step.id.clone(),
                status: step.status,
            });
        }

        step.status = StepStatus::Succeeded;
        step.timestamp = Some(at);
        Ok(&*step)
    }
}
