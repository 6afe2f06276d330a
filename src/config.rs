//! Configuration for blume.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (BLUME_DEFAULT_COUNTRY, BLUME_PHONE_POLICY,
//!    BLUME_FIXTURES, BLUME_AGENT_NAME)
//! 2. Config file (.blume/config.yaml)
//! 3. Defaults (US, strict policy, demo executions)
//!
//! Config file discovery:
//! - Searches current directory and parents for .blume/config.yaml
//! - Falls back to ~/.blume/config.yaml
//! - Paths in the config file are relative to the project root (the
//!   directory holding .blume/)
//!
//! Settings are loaded once by the binary and passed down explicitly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::core::DEFAULT_AGENT_NAME;
use crate::domain::ToolConfig;
use crate::phone::{Country, NormalizePolicy};

const CONFIG_DIR: &str = ".blume";
const CONFIG_FILE: &str = "config.yaml";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub phone: PhoneConfig,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub executions: ExecutionsConfig,
    #[serde(default)]
    pub tools: Vec<ToolConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhoneConfig {
    pub default_country: Option<Country>,
    pub policy: Option<NormalizePolicy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentConfig {
    /// Name used when the agent name field is left blank
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionsConfig {
    /// JSON/YAML file of executions (relative to the project root)
    pub fixtures: Option<String>,
}

/// Resolved settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub default_country: Country,
    pub phone_policy: NormalizePolicy,
    pub agent_name: String,
    /// Executions file; `None` means the demo set
    pub fixtures: Option<PathBuf>,
    pub tools: Vec<ToolConfig>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_country: Country::default(),
            phone_policy: NormalizePolicy::default(),
            agent_name: DEFAULT_AGENT_NAME.to_string(),
            fixtures: None,
            tools: Vec::new(),
            config_file: None,
        }
    }
}

impl Settings {
    /// Load from the process environment and the discovered config file
    pub fn load() -> Result<Self> {
        let config_file = match std::env::current_dir() {
            Ok(cwd) => find_config_file(&cwd),
            Err(_) => None,
        }
        .or_else(home_config_file);

        let parsed = match config_file {
            Some(path) => {
                let config = load_config_file(&path)?;
                Some((path, config))
            }
            None => None,
        };

        resolve(parsed, |key| std::env::var(key).ok())
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

fn home_config_file() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    path.exists().then_some(path)
}

/// Load and parse config file
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Merge config file values, environment overrides and defaults
pub fn resolve<F>(config: Option<(PathBuf, ConfigFile)>, env: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if let Some((path, config)) = config {
        // Base directory is the parent of .blume/ (i.e., grandparent of config.yaml)
        let base_dir = path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        if let Some(country) = config.phone.default_country {
            settings.default_country = country;
        }
        if let Some(policy) = config.phone.policy {
            settings.phone_policy = policy;
        }
        if let Some(name) = config.agent.name.filter(|n| !n.trim().is_empty()) {
            settings.agent_name = name;
        }
        settings.fixtures = config
            .executions
            .fixtures
            .as_deref()
            .map(|f| resolve_path(&base_dir, f));
        settings.tools = config.tools;

        debug!(path = %path.display(), "Using config file");
        settings.config_file = Some(path);
    }

    if let Some(country) = env("BLUME_DEFAULT_COUNTRY") {
        settings.default_country = country
            .parse()
            .context("Invalid BLUME_DEFAULT_COUNTRY")?;
    }
    if let Some(policy) = env("BLUME_PHONE_POLICY") {
        settings.phone_policy = policy
            .parse()
            .map_err(anyhow::Error::msg)
            .context("Invalid BLUME_PHONE_POLICY")?;
    }
    if let Some(fixtures) = env("BLUME_FIXTURES") {
        settings.fixtures = Some(PathBuf::from(fixtures));
    }
    if let Some(name) = env("BLUME_AGENT_NAME").filter(|n| !n.trim().is_empty()) {
        settings.agent_name = name;
    }

    Ok(settings)
}
