//! Calendar Connection Integration Tests
//!
//! Listing, connecting and disconnecting the agent's calendar accounts.

use blume::core::{demo_executions, CalendarSource, FixtureCalendars};
use blume::domain::{CalendarError, CalendarProvider};
use chrono::Utc;

#[tokio::test]
async fn test_demo_accounts_and_connection_state() {
    let source = FixtureCalendars::demo();
    let accounts = source.list().await.unwrap();

    assert_eq!(accounts.len(), 4);
    assert!(accounts.iter().all(|a| a.provider == CalendarProvider::Google));

    let sandbox = accounts.iter().find(|a| a.id == "cal-4").unwrap();
    assert!(!sandbox.connected);
    assert_eq!(sandbox.connect_label(), "Connect");
}

#[tokio::test]
async fn test_connect_toggles_only_the_named_account() {
    let source = FixtureCalendars::demo();

    let account = source.connect("cal-4").await.unwrap();
    assert!(account.connected);
    assert_eq!(account.connect_label(), "Reconnect");
    assert_eq!(account.last_sync_human(Utc::now()), "0s ago");

    let account = source.disconnect("cal-2").await.unwrap();
    assert!(!account.connected);

    let connected: Vec<_> = source
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|a| a.connected)
        .map(|a| a.id)
        .collect();
    assert_eq!(connected, vec!["cal-1", "cal-3", "cal-4"]);
}

#[tokio::test]
async fn test_disconnect_is_idempotent() {
    let source = FixtureCalendars::demo();

    let first = source.disconnect("cal-1").await.unwrap();
    let second = source.disconnect("cal-1").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_account_is_an_error() {
    let source = FixtureCalendars::demo();

    for result in [
        source.connect("nope").await,
        source.disconnect("nope").await,
        source.resync("nope").await,
    ] {
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CalendarError>(),
            Some(CalendarError::AccountNotFound(id)) if id == "nope"
        ));
    }
}

#[tokio::test]
async fn test_execution_targets_are_connected_accounts() {
    let source = FixtureCalendars::demo();
    let accounts = source.list().await.unwrap();

    for run in demo_executions(Utc::now()) {
        let target = run.target_calendar.unwrap();
        let account = accounts.iter().find(|a| a.account_email == target).unwrap();
        assert!(account.connected, "{} is not connected", target);
    }
}
