//! Execution Integration Tests
//!
//! Status presentation, catalog search and the approval gesture.

use blume::core::{ExecutionCatalog, ExecutionSource, FixtureSource};
use blume::domain::{
    dot_color_for_tag, intent_for_tag, to_dot_color, to_intent, ApprovalError, DotColor,
    ExecutionStatus, Intent, StepStatus,
};

#[test]
fn test_classifier_covers_every_status() {
    let expected = [
        (ExecutionStatus::Running, DotColor::Running, Intent::Default),
        (ExecutionStatus::Succeeded, DotColor::Success, Intent::Success),
        (ExecutionStatus::Failed, DotColor::Error, Intent::Error),
        (ExecutionStatus::WaitingApproval, DotColor::Pending, Intent::Warning),
    ];
    for (status, dot, intent) in expected {
        assert_eq!(to_dot_color(&status), dot);
        assert_eq!(to_intent(&status), intent);
        assert_eq!(dot_color_for_tag(status.as_str()), dot);
        assert_eq!(intent_for_tag(status.as_str()), intent);
    }

    let expected_steps = [
        (StepStatus::Pending, DotColor::Pending, Intent::Default),
        (StepStatus::Running, DotColor::Running, Intent::Default),
        (StepStatus::Succeeded, DotColor::Success, Intent::Success),
        (StepStatus::Failed, DotColor::Error, Intent::Error),
        (StepStatus::WaitingApproval, DotColor::Pending, Intent::Warning),
    ];
    assert_eq!(expected_steps.len(), StepStatus::ALL.len());
    for (status, dot, intent) in expected_steps {
        assert_eq!(to_dot_color(&status), dot, "{}", status);
        assert_eq!(to_intent(&status), intent, "{}", status);
        assert_eq!(dot_color_for_tag(status.as_str()), dot);
        assert_eq!(intent_for_tag(status.as_str()), intent);
    }

    assert_eq!(dot_color_for_tag("cancelled"), DotColor::Pending);
    assert_eq!(intent_for_tag("cancelled"), Intent::Default);
}

#[tokio::test]
async fn test_demo_source_lists_in_order() {
    let source = FixtureSource::demo();
    let executions = source.list().await.unwrap();

    let ids: Vec<_> = executions.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["exec-1", "exec-2", "exec-3", "exec-4"]);
    assert_eq!(executions[0].status, ExecutionStatus::WaitingApproval);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let source = FixtureSource::demo();

    let upper = source.search("EXEC-2").await;
    let lower = source.search("exec-2").await;
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].id, lower[0].id);
}

#[tokio::test]
async fn test_approval_flow() {
    let source = FixtureSource::demo();

    let before = source.get("exec-1").await.unwrap().unwrap();
    let waiting = before.steps.iter().find(|s| s.is_awaiting_approval()).unwrap();
    let step_id = waiting.id.clone();

    let after = source.confirm_step("exec-1", &step_id).await.unwrap();
    let step = after.step(&step_id).unwrap();
    assert_eq!(step.status, StepStatus::Succeeded);
    assert!(step.timestamp.is_some());
    assert_eq!(after.status, before.status);

    // a task step cannot be approved
    let err = source.confirm_step("exec-1", "step-1").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApprovalError>(),
        Some(ApprovalError::NotAwaitingApproval { .. })
    ));

    let err = source.confirm_step("exec-1", "step-99").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApprovalError>(),
        Some(ApprovalError::StepNotFound { .. })
    ));
}

#[test]
fn test_catalog_without_source_is_empty() {
    let catalog = ExecutionCatalog::new(Vec::new());
    assert!(catalog.is_empty());
    assert!(catalog.search("anything").is_empty());
    assert!(catalog.get("exec-1").is_none());
}
