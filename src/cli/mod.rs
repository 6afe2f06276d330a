//! Command-line interface for blume.
//!
//! Provides commands for trying phone input, registering the agent's number,
//! browsing workflow executions, approving waiting steps and managing
//! calendar connections.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};

use crate::adapters::LocalGateway;
use crate::config::Settings;
use crate::core::{
    ExecutionCatalog, ExecutionSource, FixtureSource, PhoneRegistration, RegistrationOutcome,
};
use crate::domain::{ExecutionStatus, StatusPresentation, WorkflowExecution};
use crate::phone::{display_with_calling_code, Country};

pub mod calendars;
pub mod phone;

/// blume - phone setup and workflow executions for your agent
#[derive(Parser, Debug)]
#[command(name = "blume")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Try the phone normalizer and formatter
    Phone {
        #[command(subcommand)]
        command: phone::PhoneCommands,
    },

    /// Connect the agent to a phone number
    Register {
        /// Phone number as typed
        raw: String,

        /// Country selector (defaults to the configured country)
        #[arg(short, long, value_enum)]
        country: Option<CountryArg>,

        /// Agent name (defaults to the configured name)
        #[arg(short, long)]
        agent_name: Option<String>,
    },

    /// List workflow executions
    Executions {
        /// Filter by name, agent, status or ID
        #[arg(short, long)]
        query: Option<String>,

        /// Only show executions with this status
        #[arg(short, long, value_enum)]
        status: Option<StatusArg>,

        /// Maximum number of executions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show one execution with its steps
    Show {
        /// Execution ID
        execution_id: String,
    },

    /// Approve a step that is waiting for confirmation
    Approve {
        /// Execution ID
        execution_id: String,

        /// Step ID
        step_id: String,
    },

    /// List or change calendar connections
    Calendars {
        #[command(subcommand)]
        command: Option<calendars::CalendarCommands>,
    },

    /// List configured tools
    Tools,

    /// Show resolved configuration (debug)
    Config,
}

/// Country selector for CLI (maps to Country)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CountryArg {
    /// United States (+1)
    Us,

    /// United Kingdom (+44)
    #[value(alias = "uk")]
    Gb,
}

impl From<CountryArg> for Country {
    fn from(c: CountryArg) -> Self {
        match c {
            CountryArg::Us => Country::Us,
            CountryArg::Gb => Country::Gb,
        }
    }
}

/// Execution status for CLI (maps to ExecutionStatus)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Running,
    Succeeded,
    Failed,
    WaitingApproval,
}

impl From<StatusArg> for ExecutionStatus {
    fn from(s: StatusArg) -> Self {
        match s {
            StatusArg::Running => ExecutionStatus::Running,
            StatusArg::Succeeded => ExecutionStatus::Succeeded,
            StatusArg::Failed => ExecutionStatus::Failed,
            StatusArg::WaitingApproval => ExecutionStatus::WaitingApproval,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Phone { command } => phone::execute(command, &settings),
            Commands::Register {
                raw,
                country,
                agent_name,
            } => {
                let country = country.map(Country::from).unwrap_or(settings.default_country);
                register(&settings, &raw, country, agent_name.as_deref()).await
            }
            Commands::Executions {
                query,
                status,
                limit,
            } => list_executions(&settings, query, status.map(Into::into), limit).await,
            Commands::Show { execution_id } => show_execution(&settings, &execution_id).await,
            Commands::Approve {
                execution_id,
                step_id,
            } => approve_step(&settings, &execution_id, &step_id).await,
            Commands::Calendars { command } => calendars::execute(command).await,
            Commands::Tools => {
                list_tools(&settings);
                Ok(())
            }
            Commands::Config => {
                show_config(&settings);
                Ok(())
            }
        }
    }
}

/// Build the execution source named by the settings
async fn open_source(settings: &Settings) -> Result<FixtureSource> {
    let catalog = match &settings.fixtures {
        Some(path) => ExecutionCatalog::load(path).await?,
        None => ExecutionCatalog::demo(),
    };
    Ok(FixtureSource::new(catalog))
}

/// Register a phone number against the local gateway
async fn register(
    settings: &Settings,
    raw: &str,
    country: Country,
    agent_name: Option<&str>,
) -> Result<()> {
    let flow = PhoneRegistration::new(LocalGateway::new())
        .with_policy(settings.phone_policy)
        .with_fallback_agent_name(settings.agent_name.clone());

    match flow.submit(raw, country, agent_name).await? {
        RegistrationOutcome::Invalid(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        RegistrationOutcome::Submitted {
            phone,
            agent_name,
            response,
        } => {
            if !response.success {
                anyhow::bail!(
                    "Failed to register {}: {}",
                    phone,
                    response.error.unwrap_or_else(|| "unknown error".to_string())
                );
            }

            println!("Agent:  {}", agent_name);
            println!("Number: {}", phone);
            if let Some(national) = phone.digits().strip_prefix(country.calling_code()) {
                println!("Shown:  {}", display_with_calling_code(national, country));
            }
            if let Some(message) = response.message {
                println!("\n{}", message);
            }
            Ok(())
        }
    }
}

/// List executions with their status facets
async fn list_executions(
    settings: &Settings,
    query: Option<String>,
    status: Option<ExecutionStatus>,
    limit: usize,
) -> Result<()> {
    let source = open_source(settings).await?;

    let executions: Vec<WorkflowExecution> = match query {
        Some(q) => source.search(&q).await,
        None => source.list().await?,
    }
    .into_iter()
    .filter(|e| status.map_or(true, |s| e.status == s))
    .collect();

    if executions.is_empty() {
        println!("No workflow runs yet. Trigger your first agent to see live activity.");
        return Ok(());
    }

    let now = Utc::now();
    println!(
        "{:<10} {:<40} {:<18} {:<8} {:<8} {:<6} {:<10}",
        "ID", "NAME", "STATUS", "DOT", "INTENT", "STEPS", "DURATION"
    );
    println!("{}", "-".repeat(106));

    for execution in executions.iter().take(limit) {
        println!(
            "{:<10} {:<40} {:<18} {:<8} {:<8} {:<6} {:<10}",
            execution.id,
            truncate(&execution.name, 40),
            execution.status.as_str(),
            execution.status.dot_color().as_str(),
            execution.status.intent().as_str(),
            execution.step_count(),
            execution.duration_human(now)
        );
    }

    println!("\nTotal: {} executions", executions.len());

    Ok(())
}

/// Show one execution
async fn show_execution(settings: &Settings, execution_id: &str) -> Result<()> {
    let source = open_source(settings).await?;
    let execution = source
        .get(execution_id)
        .await?
        .with_context(|| format!("Execution not found: {}", execution_id))?;

    print_execution(&execution);
    Ok(())
}

/// Approve a waiting step and print the result
async fn approve_step(settings: &Settings, execution_id: &str, step_id: &str) -> Result<()> {
    let source = open_source(settings).await?;
    let execution = source.confirm_step(execution_id, step_id).await?;

    eprintln!("[Step {} approved]\n", step_id);
    print_execution(&execution);
    Ok(())
}

fn print_execution(execution: &WorkflowExecution) {
    println!("Execution: {}", execution.id);
    println!("Name:      {}", execution.name);
    println!(
        "Status:    {} (dot: {}, intent: {})",
        execution.status,
        execution.status.dot_color(),
        execution.status.intent()
    );
    println!("Agent:     {}", execution.agent_name);
    println!("Started:   {}", execution.started_at);
    if let Some(completed) = execution.completed_at {
        println!("Completed: {}", completed);
    }
    println!("Duration:  {}", execution.duration_human(Utc::now()));
    println!(
        "Trigger:   {}",
        execution
            .trigger_description
            .as_deref()
            .unwrap_or("Manual trigger")
    );
    println!(
        "Calendar:  {}",
        execution
            .target_calendar
            .as_deref()
            .unwrap_or("Primary work calendar")
    );

    println!("\nSteps:");
    for (index, step) in execution.steps.iter().enumerate() {
        let confirm = if step.is_awaiting_approval() {
            "  [approve]"
        } else if step.can_confirm() && step.is_confirmed() {
            "  [confirmed]"
        } else {
            ""
        };
        println!(
            "  {:02} · {} ({}, {}){}",
            index + 1,
            step.label,
            step.status,
            step.status.intent(),
            confirm
        );
        if !step.description.is_empty() {
            println!("       {}", step.description);
        }
        match step.timestamp {
            Some(ts) => println!("       {}", ts),
            None => println!("       Pending"),
        }
    }
}

/// List configured tools and whether they are ready
fn list_tools(settings: &Settings) {
    if settings.tools.is_empty() {
        println!("No tools configured. Add a `tools:` list to .blume/config.yaml.");
        return;
    }

    for tool in &settings.tools {
        let state = match tool.validate() {
            Ok(()) => "ready".to_string(),
            Err(err) => format!("incomplete: {}", err),
        };
        println!("{:<20} {}", tool.name(), state);
        if !tool.description().is_empty() {
            println!("  {}", tool.description());
        }
    }
}

fn show_config(settings: &Settings) {
    println!(
        "Config file: {}",
        settings
            .config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Phone:");
    println!(
        "  Default country: {} ({})",
        settings.default_country,
        settings.default_country.label()
    );
    println!("  Policy:          {:?}", settings.phone_policy);
    println!();
    println!("Agent:");
    println!("  Fallback name:   {}", settings.agent_name);
    println!();
    println!("Executions:");
    println!(
        "  Source:          {}",
        settings
            .fixtures
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in demo set)".to_string())
    );
    println!();
    println!("Tools:             {}", settings.tools.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_phone_normalize() {
        let cli = Cli::try_parse_from([
            "blume", "phone", "normalize", "07123456789", "--country", "uk",
        ])
        .unwrap();

        match cli.command {
            Commands::Phone {
                command:
                    phone::PhoneCommands::Normalize {
                        raw,
                        country,
                        lenient,
                    },
            } => {
                assert_eq!(raw, "07123456789");
                assert_eq!(country.map(Country::from), Some(Country::Gb));
                assert!(!lenient);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_status_filter() {
        let cli = Cli::try_parse_from([
            "blume",
            "executions",
            "--status",
            "waiting-approval",
        ])
        .unwrap();

        match cli.command {
            Commands::Executions { status, limit, .. } => {
                assert_eq!(
                    status.map(ExecutionStatus::from),
                    Some(ExecutionStatus::WaitingApproval)
                );
                assert_eq!(limit, 20);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_calendars() {
        let cli = Cli::try_parse_from(["blume", "calendars"]).unwrap();
        assert!(matches!(cli.command, Commands::Calendars { command: None }));

        let cli = Cli::try_parse_from(["blume", "calendars", "disconnect", "cal-2"]).unwrap();
        match cli.command {
            Commands::Calendars {
                command: Some(calendars::CalendarCommands::Disconnect { id }),
            } => assert_eq!(id, "cal-2"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Blocked focus time: Deep work", 10), "Blocked...");
    }
}
