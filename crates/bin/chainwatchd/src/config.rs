//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `chainwatch.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Deserialize;

use chainwatch_app::action_bus::ParamRule;
use chainwatch_domain::config::ConfigDocument;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Console asset settings.
    pub console: ConsoleConfig,
    /// Actions the command endpoint accepts.
    pub actions: ActionsConfig,
    /// Configuration documents shown as editable tables.
    pub tables: Vec<TableSource>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Where the built console lives.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Directory holding `index.html` and the wasm bundle. Not served when unset.
    pub assets_dir: Option<PathBuf>,
}

/// Registered command endpoint actions.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    pub registered: Vec<ActionConfig>,
}

/// One action accepted by the command endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionConfig {
    pub name: String,
    #[serde(default)]
    pub param: ParamConfig,
}

/// What `param` an action accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamConfig {
    #[default]
    Ignored,
    OptionalInteger,
    Required,
}

impl From<ParamConfig> for ParamRule {
    fn from(value: ParamConfig) -> Self {
        match value {
            ParamConfig::Ignored => Self::Ignored,
            ParamConfig::OptionalInteger => Self::OptionalInteger,
            ParamConfig::Required => Self::Required,
        }
    }
}

/// A JSON configuration document rendered as one table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableSource {
    /// Table name, used in URLs and DOM ids.
    pub name: String,
    /// Path to the JSON document.
    pub path: PathBuf,
}

impl Config {
    /// Load configuration from `chainwatch.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("chainwatch.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CHAINWATCH_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("CHAINWATCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("CHAINWATCH_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("CHAINWATCH_ASSETS") {
            self.console.assets_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("CHAINWATCH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        let mut seen = HashSet::new();
        for table in &self.tables {
            if table.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "table name must not be empty".to_string(),
                ));
            }
            if !seen.insert(table.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "table `{}` is declared twice",
                    table.name
                )));
            }
        }
        if self.actions.registered.iter().any(|a| a.name.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "action name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl TableSource {
    /// Read and parse the JSON document behind this table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not JSON, or is not a
    /// JSON object.
    pub async fn load(&self) -> Result<ConfigDocument, ConfigError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        self.parse(&content)
    }

    fn parse(&self, content: &str) -> Result<ConfigDocument, ConfigError> {
        match serde_json::from_str(content)? {
            serde_json::Value::Object(values) => Ok(ConfigDocument::new(&self.name, values)),
            _ => Err(ConfigError::Validation(format!(
                "{} must contain a JSON object",
                self.path.display()
            ))),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "chainwatchd=info,chainwatch=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            registered: vec![
                ActionConfig {
                    name: "updateQR".to_string(),
                    param: ParamConfig::Ignored,
                },
                ActionConfig {
                    name: "resetDB".to_string(),
                    param: ParamConfig::OptionalInteger,
                },
            ],
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Configuration document is not valid JSON.
    #[error("failed to parse configuration document")]
    Document(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
