//! Configuration management for moneypool
//!
//! This module handles loading, validation, and management of
//! moneypool configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Upstream pool API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base endpoint, the pool id is appended as the last path segment
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Value sent in the `x-api-key` header
    #[serde(default)]
    pub key: String,
    /// Request timeout in seconds (none by default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            key: String::new(),
            timeout_secs: None,
        }
    }
}

fn default_endpoint() -> String {
    "https://example.invalid/getDetails".to_string()
}

/// Where contributors send money
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Display name of the payment provider
    #[serde(default = "default_provider")]
    pub provider: String,
    /// External payment link
    #[serde(default)]
    pub link: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            link: String::new(),
        }
    }
}

fn default_provider() -> String {
    "PayPal".to_string()
}

/// Page appearance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Colour mode used when a request does not ask for one
    #[serde(default)]
    pub color_mode: ColorMode,
    /// Browser title
    #[serde(default = "default_ui_title")]
    pub title: String,
    /// Link to the project source
    #[serde(default = "default_project_link")]
    pub project_link: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::default(),
            title: default_ui_title(),
            project_link: default_project_link(),
        }
    }
}

fn default_ui_title() -> String {
    "Moneypool".to_string()
}

fn default_project_link() -> String {
    "https://github.com/gsx95/moneypool".to_string()
}

/// Colour mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// The other mode, used by the toggle control
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(format!("Invalid color mode: {}", s)),
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

/// Currency formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Currency symbol
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Currency symbol position ("before" or "after")
    #[serde(default)]
    pub symbol_position: SymbolPosition,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            symbol_position: SymbolPosition::After,
        }
    }
}

impl CurrencyConfig {
    /// Attach the currency symbol to an already formatted amount
    pub fn decorate(&self, amount: &str) -> String {
        match self.symbol_position {
            SymbolPosition::Before => format!("{}{}", self.symbol, amount),
            SymbolPosition::After => format!("{}{}", amount, self.symbol),
        }
    }
}

fn default_symbol() -> String {
    "€".to_string()
}

/// Currency symbol position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    #[default]
    After,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
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

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Pool API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Payment settings
    #[serde(default)]
    pub payment: PaymentConfig,
    /// Appearance
    #[serde(default)]
    pub ui: UiConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError,
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        let endpoint = self.api.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::MissingField {
                field: "api.endpoint".to_string(),
            });
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "api.endpoint".to_string(),
                reason: "Endpoint must start with http:// or https://".to_string(),
            });
        }

        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "Timeout must be greater than 0 seconds".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("Log level must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Listen address for the web server
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ==================== Tests ====================
