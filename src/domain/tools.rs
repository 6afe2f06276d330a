//! Tools an agent may be granted.
//!
//! Each kind carries its own typed settings. Adding a kind means adding a
//! variant, and every `match` below must then handle it.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A configured tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolConfig {
    /// Read/create events on specific calendars
    GoogleCalendar(GoogleCalendarConfig),

    /// Slot reserved for a tool that has not been wired up yet
    Placeholder {
        name: String,
        #[serde(default)]
        description: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoogleCalendarConfig {
    /// Service-account JSON or token
    #[serde(default)]
    pub credentials: String,

    /// Calendars the agent may touch; accepts a list or a comma-separated string
    #[serde(default, deserialize_with = "calendar_list")]
    pub allowed_calendars: Vec<String>,
}

/// Discriminant of [`ToolConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    GoogleCalendar,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolConfigError {
    #[error("{tool}: credentials are missing")]
    MissingCredentials { tool: String },

    #[error("{tool}: at least one allowed calendar is required")]
    NoAllowedCalendars { tool: String },
}

impl ToolConfig {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolConfig::GoogleCalendar(_) => ToolKind::GoogleCalendar,
            ToolConfig::Placeholder { .. } => ToolKind::Placeholder,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ToolConfig::GoogleCalendar(_) => "Google Calendar",
            ToolConfig::Placeholder { name, .. } => name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ToolConfig::GoogleCalendar(_) => {
                "Let the agent read/create events on specific calendars."
            }
            ToolConfig::Placeholder { description, .. } => description,
        }
    }

    /// Check that the payload is complete enough to hand to the agent
    pub fn validate(&self) -> Result<(), ToolConfigError> {
        match self {
            ToolConfig::GoogleCalendar(config) => {
                if config.credentials.trim().is_empty() {
                    return Err(ToolConfigError::MissingCredentials {
                        tool: self.name().to_string(),
                    });
                }
                if config.allowed_calendars.is_empty() {
                    return Err(ToolConfigError::NoAllowedCalendars {
                        tool: self.name().to_string(),
                    });
                }
                Ok(())
            }
            ToolConfig::Placeholder { .. } => Ok(()),
        }
    }
}

/// Split `primary, team@company.com` into trimmed, non-empty entries
pub fn parse_calendar_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn calendar_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::List(items) => items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        Raw::Csv(raw) => parse_calendar_list(&raw),
    })
}
