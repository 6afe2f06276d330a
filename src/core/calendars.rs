//! Calendar connections: the seam the calendar views read and change.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{CalendarAccount, CalendarError};

use super::fixtures::demo_calendars;

/// Trait for whatever holds the agent's calendar accounts
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// All accounts, connected or not, in source order
    async fn list(&self) -> Result<Vec<CalendarAccount>>;

    /// Connect (or re-authorize) an account; returns the updated account
    async fn connect(&self, id: &str) -> Result<CalendarAccount>;

    /// Disconnect an account; returns the updated account
    async fn disconnect(&self, id: &str) -> Result<CalendarAccount>;

    /// Refresh a connected account's sync time
    async fn resync(&self, id: &str) -> Result<CalendarAccount>;
}

/// In-memory accounts; changes last as long as the value
#[derive(Debug, Default)]
pub struct FixtureCalendars {
    accounts: RwLock<Vec<CalendarAccount>>,
}

impl FixtureCalendars {
    pub fn new(accounts: Vec<CalendarAccount>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    /// Seeded with the demo accounts
    pub fn demo() -> Self {
        Self::new(demo_calendars(Utc::now()))
    }

    /// Apply `change` to one account and return the result
    async fn update<F>(&self, id: &str, change: F) -> Result<CalendarAccount>
    where
        F: FnOnce(&mut CalendarAccount) -> Result<(), CalendarError> + Send,
    {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| CalendarError::AccountNotFound(id.to_string()))?;

        change(account)?;
        Ok(account.clone())
    }
}

#[async_trait]
impl CalendarSource for FixtureCalendars {
    async fn list(&self) -> Result<Vec<CalendarAccount>> {
        Ok(self.accounts.read().await.clone())
    }

    async fn connect(&self, id: &str) -> Result<CalendarAccount> {
        let account = self
            .update(id, |a| {
                a.connect(Utc::now());
                Ok(())
            })
            .await?;
        info!(id, email = %account.account_email, "Connected calendar");
        Ok(account)
    }

    async fn disconnect(&self, id: &str) -> Result<CalendarAccount> {
        let account = self
            .update(id, |a| {
                a.disconnect();
                Ok(())
            })
            .await?;
        info!(id, email = %account.account_email, "Disconnected calendar");
        Ok(account)
    }

    async fn resync(&self, id: &str) -> Result<CalendarAccount> {
        let account = self.update(id, |a| a.resync(Utc::now())).await?;
        info!(id, email = %account.account_email, "Resynced calendar");
        Ok(account)
    }
}
