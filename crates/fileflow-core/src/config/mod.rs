//! Configuration types for the FileFlow dashboard.
//!
//! Configuration is loaded from a single YAML file (`fileflow.yaml`). Every
//! section and field has a default, so an empty file is a valid config.

pub mod dashboard;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use dashboard::{AuthConfig, BasicAuthUser, DashboardConfig};

/// Complete FileFlow configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileFlowConfig {
    /// Web UI settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Table engine defaults.
    #[serde(default)]
    pub table: TableConfig,

    /// Mock data generation.
    #[serde(default)]
    pub mock: MockConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Table engine settings shared by every resource page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Mock data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Seed for the random parts of the mock data (user and department
    /// activity, department status).
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Delay before slow pages swap their skeleton for the real table.
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            loading_delay_ms: default_loading_delay_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `fileflow_dashboard=debug`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_page_size() -> usize {
    fileflow_table::DEFAULT_PAGE_SIZE
}

fn default_seed() -> u64 {
    42
}

fn default_loading_delay_ms() -> u64 {
    1500
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FileFlowConfig {
    /// Load configuration from a YAML file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content and validate it.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document; treat it as all defaults.
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.page_size == 0 {
            return Err(ConfigError::Config(
                "table.page_size must be at least 1".to_string(),
            ));
        }
        if self.dashboard.host.trim().is_empty() {
            return Err(ConfigError::Config("dashboard.host must not be empty".to_string()));
        }
        for user in &self.dashboard.auth.users {
            if user.username.trim().is_empty() {
                return Err(ConfigError::Config(
                    "dashboard.auth.users: username must not be empty".to_string(),
                ));
            }
            if user.password.is_none() && user.password_env.is_none() {
                return Err(ConfigError::Config(format!(
                    "dashboard.auth.users: user '{}' needs password or password_env",
                    user.username
                )));
            }
        }
        Ok(())
    }
}
