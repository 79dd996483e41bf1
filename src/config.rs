/*!
 * Configuration for a groundlink run
 */

use std::path::{Path, PathBuf};
use std::time::Duration;

use groundlink_connect::TransportOptions;
use groundlink_interface::{ActionInvocation, Attribute, ParameterAssignment};
use serde::{Deserialize, Serialize};

use crate::error::{GroundError, Result};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "GROUNDLINK_CONFIG";

/// Run configuration. Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundConfig {
    /// Exact name of the provider to drive
    #[serde(default = "default_provider_name")]
    pub provider_name: String,

    /// Parameter written before the action is launched
    #[serde(default)]
    pub parameter: ParameterConfig,

    /// Action launched once the parameter is set
    #[serde(default)]
    pub action: ActionConfig,

    /// Transport timeouts
    #[serde(default)]
    pub transport: TransportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path (None = stderr)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (shorthand for log_level = debug)
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            provider_name: default_provider_name(),
            parameter: ParameterConfig::default(),
            action: ActionConfig::default(),
            transport: TransportConfig::default(),
            log_level: LogLevel::Info,
            log_file: None,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterConfig {
    #[serde(default = "default_parameter_name")]
    pub name: String,

    #[serde(default = "default_parameter_value")]
    pub value: Attribute,
}

impl Default for ParameterConfig {
    fn default() -> Self {
        Self {
            name: default_parameter_name(),
            value: default_parameter_value(),
        }
    }
}

impl ParameterConfig {
    pub fn to_assignment(&self) -> ParameterAssignment {
        ParameterAssignment::new(self.name.clone(), self.value.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    #[serde(default = "default_action_name")]
    pub name: String,

    #[serde(default = "default_action_arguments")]
    pub arguments: Vec<Attribute>,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            name: default_action_name(),
            arguments: default_action_arguments(),
        }
    }
}

impl ActionConfig {
    pub fn to_invocation(&self) -> ActionInvocation {
        ActionInvocation {
            name: self.name.clone(),
            arguments: self.arguments.clone(),
        }
    }
}

/// Timeouts handed to the gRPC transport, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl TransportConfig {
    pub fn to_options(&self) -> TransportOptions {
        TransportOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,

    /// Warnings and errors
    Warn,

    /// Info, warnings, and errors
    #[default]
    Info,

    /// Debug and above
    Debug,

    /// All messages including traces
    Trace,
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

// Default value functions for serde
fn default_provider_name() -> String {
    "App: hello-world".to_string()
}

fn default_parameter_name() -> String {
    "A_Parameter".to_string()
}

fn default_parameter_value() -> Attribute {
    Attribute::String("The parameter was set!".to_string())
}

fn default_action_name() -> String {
    "Go".to_string()
}

fn default_action_arguments() -> Vec<Attribute> {
    vec![Attribute::Double(1.35565)]
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

impl GroundConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GroundError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config: GroundConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| GroundError::Config(format!("TOML serialize error: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from the file named by `GROUNDLINK_CONFIG`, or fall back to defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.provider_name.is_empty() {
            return Err(GroundError::Config(
                "provider_name must not be empty".to_string(),
            ));
        }
        if self.parameter.name.is_empty() {
            return Err(GroundError::Config(
                "parameter.name must not be empty".to_string(),
            ));
        }
        if self.action.name.is_empty() {
            return Err(GroundError::Config(
                "action.name must not be empty".to_string(),
            ));
        }
        if self.transport.connect_timeout_secs == 0 || self.transport.request_timeout_secs == 0 {
            return Err(GroundError::Config(
                "transport timeouts must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
