//! Demo executions and calendar accounts served until a real data source is
//! connected.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{
    CalendarAccount, ExecutionStatus, StepKind, StepStatus, WorkflowExecution, WorkflowStep,
};

/// The four demo runs, with timestamps relative to `now`
pub fn demo_executions(now: DateTime<Utc>) -> Vec<WorkflowExecution> {
    let ago = |minutes: i64| now - Duration::minutes(minutes);

    vec![
        WorkflowExecution::new("exec-1", "Scheduled meeting: Q4 Planning", "Blume", ago(8))
            .with_status(ExecutionStatus::WaitingApproval)
            .with_step(
                WorkflowStep::new("step-1", "Analyzed calendar availability", StepStatus::Succeeded)
                    .with_description("Checked all participants' calendars for next 2 weeks")
                    .with_timestamp(ago(8))
                    .with_kind(StepKind::System),
            )
            .with_step(
                WorkflowStep::new("step-2", "Found optimal time slot", StepStatus::Succeeded)
                    .with_description("Proposed Dec 18, 2:00 PM - 3:30 PM (all participants free)")
                    .with_timestamp(ago(7)),
            )
            .with_step(
                WorkflowStep::new("step-3", "Awaiting approval", StepStatus::WaitingApproval)
                    .with_description("Waiting for confirmation before sending calendar invites")
                    .with_kind(StepKind::Approval),
            )
            .with_trigger("SMS: 'Schedule Q4 planning meeting'")
            .with_target_calendar("amy@company.com"),
        WorkflowExecution::new("exec-2", "Blocked focus time: Deep work session", "Blume", ago(45))
            .with_status(ExecutionStatus::Succeeded)
            .with_step(
                WorkflowStep::new("step-1", "Identified free blocks", StepStatus::Succeeded)
                    .with_description("Found 3-hour window tomorrow 9 AM - 12 PM")
                    .with_timestamp(ago(45))
                    .with_kind(StepKind::System),
            )
            .with_step(
                WorkflowStep::new("step-2", "Created calendar event", StepStatus::Succeeded)
                    .with_description("Added 'Deep Work: Project Alpha' to calendar")
                    .with_timestamp(ago(44)),
            )
            .with_completed_at(ago(44))
            .with_trigger("SMS: 'Block 3 hours for deep work tomorrow'")
            .with_target_calendar("amy@company.com"),
        WorkflowExecution::new("exec-3", "Rescheduled: Team standup", "Blume", ago(2))
            .with_status(ExecutionStatus::Running)
            .with_step(
                WorkflowStep::new("step-1", "Detected conflict", StepStatus::Succeeded)
                    .with_description("Found overlap with 'Client Call' at 10 AM")
                    .with_timestamp(ago(2))
                    .with_kind(StepKind::System),
            )
            .with_step(
                WorkflowStep::new("step-2", "Finding alternative time", StepStatus::Running)
                    .with_description("Searching for next available slot...")
                    .with_timestamp(ago(1)),
            )
            .with_trigger("Auto-detected calendar conflict")
            .with_target_calendar("team@company.com"),
        WorkflowExecution::new("exec-4", "Failed: Schedule all-hands meeting", "Blume", ago(120))
            .with_status(ExecutionStatus::Failed)
            .with_step(
                WorkflowStep::new("step-1", "Attempted to find time", StepStatus::Succeeded)
                    .with_description("Searched for 1-hour slot for 50+ participants")
                    .with_timestamp(ago(120))
                    .with_kind(StepKind::System),
            )
            .with_step(
                WorkflowStep::new("step-2", "No suitable time found", StepStatus::Failed)
                    .with_description("Could not find a slot where all participants are available")
                    .with_timestamp(ago(119)),
            )
            .with_completed_at(ago(119))
            .with_trigger("SMS: 'Schedule all-hands for next week'")
            .with_target_calendar("team@company.com"),
    ]
}

/// The four demo calendar accounts; only `cal-4` is disconnected
pub fn demo_calendars(now: DateTime<Utc>) -> Vec<CalendarAccount> {
    let ago = |minutes: i64| now - Duration::minutes(minutes);

    vec![
        CalendarAccount::new("cal-1", "amy@company.com", ago(2))
            .with_scope("Read/write on primary + project calendars"),
        CalendarAccount::new("cal-2", "team@company.com", ago(15))
            .with_scope("Read-only access to planning calendars"),
        CalendarAccount::new("cal-3", "personal@gmail.com", ago(5))
            .with_scope("Read/write on personal calendar"),
        CalendarAccount::new("cal-4", "sandbox@company.com", ago(60 * 24))
            .with_connected(false)
            .with_scope("No active connection"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_set_covers_every_execution_status() {
        let runs = demo_executions(Utc::now());
        for status in ExecutionStatus::ALL {
            assert!(runs.iter().any(|r| r.status == status), "missing {}", status);
        }
    }

    #[test]
    fn test_demo_execution_calendars_are_known_accounts() {
        let now = Utc::now();
        let calendars = demo_calendars(now);
        for run in demo_executions(now) {
            let target = run.target_calendar.unwrap();
            assert!(calendars.iter().any(|c| c.account_email == target), "{}", target);
        }
    }

    #[test]
    fn test_demo_durations() {
        let now = Utc::now();
        let runs = demo_executions(now);
        assert_eq!(runs[0].duration_human(now), "8m 0s");
        assert_eq!(runs[1].duration_human(now), "1m 0s");
    }
}
