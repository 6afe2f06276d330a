//! Execution catalog: the list views' search, lookup and approval logic,
//! plus the data-source seam that feeds it.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::{ApprovalError, ExecutionStatus, WorkflowExecution, WorkflowStep};

use super::fixtures::demo_executions;

/// Ordered set of executions as supplied by the data source
#[derive(Debug, Clone, Default)]
pub struct ExecutionCatalog {
    executions: Vec<WorkflowExecution>,
}

impl ExecutionCatalog {
    pub fn new(executions: Vec<WorkflowExecution>) -> Self {
        Self { executions }
    }

    /// Catalog seeded with the demo runs
    pub fn demo() -> Self {
        Self::new(demo_executions(Utc::now()))
    }

    /// Load executions from a `.json`, `.yaml` or `.yml` file holding a list
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read executions file: {}", path.display()))?;

        let executions: Vec<WorkflowExecution> = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse executions YAML: {}", path.display()))?,
            _ => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse executions JSON: {}", path.display()))?,
        };

        debug!(count = executions.len(), path = %path.display(), "Loaded executions");
        Ok(Self::new(executions))
    }

    pub fn all(&self) -> &[WorkflowExecution] {
        &self.executions
    }

    pub fn len(&self) -> usize {
        self.executions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executions.is_empty()
    }

    /// Get an execution by ID
    pub fn get(&self, id: &str) -> Option<&WorkflowExecution> {
        self.executions.iter().find(|e| e.id == id)
    }

    /// Search by name, agent, status or ID (case-insensitive substring)
    pub fn search(&self, query: &str) -> Vec<&WorkflowExecution> {
        self.executions
            .iter()
            .filter(|e| e.matches_query(query))
            .collect()
    }

    pub fn filter_by_status(&self, status: ExecutionStatus) -> Vec<&WorkflowExecution> {
        self.executions
            .iter()
            .filter(|e| e.status == status)
            .collect()
    }

    /// Approve a waiting approval step
    pub fn approve_step(
        &mut self,
        execution_id: &str,
        step_id: &str,
    ) -> Result<&WorkflowStep, ApprovalError> {
        let execution = self
            .executions
            .iter_mut()
            .find(|e| e.id == execution_id)
            .ok_or_else(|| ApprovalError::ExecutionNotFound(execution_id.to_string()))?;

        execution.approve_step(step_id, Utc::now())
    }
}

/// Trait for whatever supplies executions to the views
#[async_trait]
pub trait ExecutionSource: Send + Sync {
    /// All executions, in source order
    async fn list(&self) -> Result<Vec<WorkflowExecution>>;

    /// A single execution, if it exists
    async fn get(&self, id: &str) -> Result<Option<WorkflowExecution>>;

    /// Mark an approval step as confirmed; returns the updated execution
    async fn confirm_step(&self, execution_id: &str, step_id: &str) -> Result<WorkflowExecution>;
}

/// In-memory source backed by an [`ExecutionCatalog`]
#[derive(Debug, Default)]
pub struct FixtureSource {
    catalog: RwLock<ExecutionCatalog>,
}

impl FixtureSource {
    pub fn new(catalog: ExecutionCatalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    pub fn demo() -> Self {
        Self::new(ExecutionCatalog::demo())
    }

    /// Search without cloning the whole list first
    pub async fn search(&self, query: &str) -> Vec<WorkflowExecution> {
        self.catalog
            .read()
            .await
            .search(query)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ExecutionSource for FixtureSource {
    async fn list(&self) -> Result<Vec<WorkflowExecution>> {
        Ok(self.catalog.read().await.all().to_vec())
    }

    async fn get(&self, id: &str) -> Result<Option<WorkflowExecution>> {
        Ok(self.catalog.read().await.get(id).cloned())
    }

    async fn confirm_step(&self, execution_id: &str, step_id: &str) -> Result<WorkflowExecution> {
        let mut catalog = self.catalog.write().await;
        catalog.approve_step(execution_id, step_id)?;
        info!(execution_id, step_id, "Confirmed workflow step");

        catalog
            .get(execution_id)
            .cloned()
            .ok_or_else(|| ApprovalError::ExecutionNotFound(execution_id.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StepStatus;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn temp_file(suffix: &str) -> NamedTempFile {
        Builder::new().suffix(suffix).tempfile().unwrap()
    }

    #[test]
    fn test_search_preserves_order() {
        let catalog = ExecutionCatalog::demo();

        let ids: Vec<_> = catalog.search("").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["exec-1", "exec-2", "exec-3", "exec-4"]);

        let ids: Vec<_> = catalog
            .search("SCHEDULE")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["exec-1", "exec-3", "exec-4"]);
    }

    #[test]
    fn test_search_by_status_and_id() {
        let catalog = ExecutionCatalog::demo();
        assert_eq!(catalog.search("running").len(), 1);
        assert_eq!(catalog.search("exec-4")[0].status, ExecutionStatus::Failed);
        assert!(catalog.search("nothing like this").is_empty());
    }

    #[test]
    fn test_filter_by_status() {
        let catalog = ExecutionCatalog::demo();
        let waiting = catalog.filter_by_status(ExecutionStatus::WaitingApproval);
        assert_eq!(waiting.len(), 1);
        assert_eq!(waiting[0].id, "exec-1");
    }

    #[test]
    fn test_approve_unknown_execution() {
        let mut catalog = ExecutionCatalog::demo();
        let err = catalog.approve_step("exec-99", "step-1").unwrap_err();
        assert_eq!(err, ApprovalError::ExecutionNotFound("exec-99".to_string()));
    }

    #[tokio::test]
    async fn test_fixture_source_confirm() {
        let source = FixtureSource::demo();

        let updated = source.confirm_step("exec-1", "step-3").await.unwrap();
        assert_eq!(updated.steps[2].status, StepStatus::Succeeded);
        assert!(updated.steps[2].timestamp.is_some());

        // visible to later reads
        let reread = source.get("exec-1").await.unwrap().unwrap();
        assert!(reread.steps[2].is_confirmed());

        let err = source.confirm_step("exec-1", "step-3").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ApprovalError>(),
            Some(ApprovalError::NotAwaitingApproval { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_from_json_file() {
        let mut file = temp_file(".json");
        write!(
            file,
            r#"[{{
                "id": "exec-9",
                "name": "Moved dentist appointment",
                "agent_name": "Calendar Copilot",
                "status": "succeeded",
                "started_at": "2026-01-05T09:00:00Z",
                "steps": [
                    {{"id": "s1", "label": "Found slot", "status": "succeeded"}}
                ]
            }}]"#
        )
        .unwrap();

        let catalog = ExecutionCatalog::load(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.search("copilot").len(), 1);
        assert_eq!(catalog.get("exec-9").unwrap().step_count(), 1);
    }

    #[tokio::test]
    async fn test_load_from_yaml_file() {
        let mut file = temp_file(".yaml");
        writeln!(
            file,
            r#"
- id: exec-7
  name: Weekly review
  agent_name: Blume
  status: waiting_approval
  started_at: 2026-01-05T09:00:00Z
  steps:
    - id: approve
      label: Send invites?
      status: waiting_approval
      kind: approval
"#
        )
        .unwrap();

        let source = FixtureSource::new(ExecutionCatalog::load(file.path()).await.unwrap());
        let updated = source.confirm_step("exec-7", "approve").await.unwrap();
        assert_eq!(updated.status, ExecutionStatus::WaitingApproval);
        assert!(updated.steps[0].is_confirmed());
    }
}
