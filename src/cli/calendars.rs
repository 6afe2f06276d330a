//! Calendar CLI subcommands.
//!
//! Provides commands to:
//! - `list`: Show every account with its connection state (the default)
//! - `connect`, `disconnect`, `resync`: Change one account and print it

use anyhow::Result;
use chrono::Utc;
use clap::Subcommand;

use crate::core::{CalendarSource, FixtureCalendars};
use crate::domain::CalendarAccount;

/// Calendar-related subcommands
#[derive(Subcommand, Debug)]
pub enum CalendarCommands {
    /// List calendar accounts
    List,

    /// Connect or re-authorize an account
    Connect {
        /// Account ID (e.g. cal-4)
        id: String,
    },

    /// Disconnect an account
    Disconnect {
        /// Account ID
        id: String,
    },

    /// Refresh a connected account
    Resync {
        /// Account ID
        id: String,
    },
}

pub(super) async fn execute(command: Option<CalendarCommands>) -> Result<()> {
    let source = FixtureCalendars::demo();

    match command.unwrap_or(CalendarCommands::List) {
        CalendarCommands::List => list_calendars(&source.list().await?),
        CalendarCommands::Connect { id } => print_account(&source.connect(&id).await?),
        CalendarCommands::Disconnect { id } => print_account(&source.disconnect(&id).await?),
        CalendarCommands::Resync { id } => print_account(&source.resync(&id).await?),
    }

    Ok(())
}

fn list_calendars(accounts: &[CalendarAccount]) {
    if accounts.is_empty() {
        println!("No calendars connected yet.");
        return;
    }

    let now = Utc::now();
    println!(
        "{:<8} {:<8} {:<24} {:<12} {:<14}",
        "ID", "PROVIDER", "ACCOUNT", "STATE", "LAST SYNC"
    );
    println!("{}", "-".repeat(70));

    for account in accounts {
        println!(
            "{:<8} {:<8} {:<24} {:<12} {:<14}",
            account.id,
            account.provider.as_str().to_uppercase(),
            account.account_email,
            connection_state(account),
            account.last_sync_human(now)
        );
    }

    let connected = accounts.iter().filter(|a| a.connected).count();
    println!("\nConnected: {} of {}", connected, accounts.len());
}

fn print_account(account: &CalendarAccount) {
    println!("Account:   {} ({})", account.account_email, account.id);
    println!("Provider:  {}", account.provider.as_str().to_uppercase());
    println!("State:     {}", connection_state(account));
    println!("Scope:     {}", account.scope_description);
    println!("Last sync: {}", account.last_sync_human(Utc::now()));
    println!("Action:    {}", account.connect_label());
}

fn connection_state(account: &CalendarAccount) -> &'static str {
    if account.connected {
        "connected"
    } else {
        "disconnected"
    }
}
