//! Calendar accounts the agent can be given access to, and the events it
//! places on them.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::duration::format_duration;

/// Calendar provider behind an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarProvider {
    #[default]
    Google,
}

impl CalendarProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarProvider::Google => "google",
        }
    }
}

impl fmt::Display for CalendarProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One connected (or previously connected) calendar account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarAccount {
    pub id: String,

    #[serde(default)]
    pub provider: CalendarProvider,

    pub account_email: String,

    #[serde(default)]
    pub connected: bool,

    pub last_sync: DateTime<Utc>,

    /// What the agent may do with this calendar, as shown to the user
    #[serde(default)]
    pub scope_description: String,
}

/// An event the agent placed on a calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub calendar_id: String,

    /// Execution that created the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_execution_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Calendar account not found: {0}")]
    AccountNotFound(String),

    #[error("Calendar account {0} is not connected")]
    NotConnected(String),
}

impl CalendarAccount {
    /// A connected Google account, last synced at `last_sync`
    pub fn new(
        id: impl Into<String>,
        account_email: impl Into<String>,
        last_sync: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            provider: CalendarProvider::Google,
            account_email: account_email.into(),
            connected: true,
            last_sync,
            scope_description: String::new(),
        }
    }

    pub fn with_connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope_description = scope.into();
        self
    }

    /// Connect, or re-authorize an account that is already connected
    pub fn connect(&mut self, at: DateTime<Utc>) {
        self.connected = true;
        self.last_sync = at;
    }

    /// Drop the connection; the last sync time is kept
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn resync(&mut self, at: DateTime<Utc>) -> Result<(), CalendarError> {
        if !self.connected {
            return Err(CalendarError::NotConnected(self.id.clone()));
        }
        self.last_sync = at;
        Ok(())
    }

    /// e.g. `2m 0s ago`
    pub fn last_sync_human(&self, now: DateTime<Utc>) -> String {
        format!("{} ago", format_duration(now - self.last_sync))
    }

    /// Label for the connect action
    pub fn connect_label(&self) -> &'static str {
        if self.connected {
            "Reconnect"
        } else {
            "Connect"
        }
    }
}

impl CalendarEvent {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn created_by(&self, execution_id: &str) -> bool {
        self.source_execution_id.as_deref() == Some(execution_id)
    }
}
