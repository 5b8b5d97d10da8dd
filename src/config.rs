//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::api::SessionStore;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub water: WaterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// FitFusion backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Workout plan generator, woken up before plan generation. Blank disables it.
    #[serde(
        default = "default_plan_service_url",
        deserialize_with = "deserialize_optional_url"
    )]
    pub plan_service_url: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_backend_url() -> String {
    "https://health4-lmzi.onrender.com".to_string()
}

fn default_plan_service_url() -> Option<String> {
    Some("https://workout-plan-app.onrender.com".to_string())
}

fn deserialize_optional_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let url = Option::<String>::deserialize(deserializer)?;
    Ok(url.filter(|u| !u.trim().is_empty()))
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            plan_service_url: default_plan_service_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Where the session token lives
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Token file; defaults to the user config directory
    pub token_file: Option<String>,
}

impl SessionConfig {
    pub fn store(&self) -> SessionStore {
        match &self.token_file {
            Some(path) => SessionStore::new(path),
            None => SessionStore::new(SessionStore::default_path()),
        }
    }
}

/// Water tracker configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WaterConfig {
    #[serde(default = "default_daily_goal_ml")]
    pub daily_goal_ml: u32,
}

fn default_daily_goal_ml() -> u32 {
    crate::water::DEFAULT_DAILY_GOAL_ML
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            daily_goal_ml: default_daily_goal_ml(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("fitfusion").join("config.toml")),
            Some(PathBuf::from("/etc/fitfusion/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Backend overrides
        if let Some(url) = var("FITFUSION_BACKEND_URL") {
            self.backend.url = url;
        }
        if let Some(url) = var("FITFUSION_PLAN_SERVICE_URL") {
            self.backend.plan_service_url = if url.trim().is_empty() { None } else { Some(url) };
        }
        if let Some(timeout) = var("FITFUSION_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.backend.request_timeout_secs = t;
            }
        }

        // Session overrides
        if let Some(path) = var("FITFUSION_SESSION_FILE") {
            self.session.token_file = Some(path);
        }

        // Water overrides
        if let Some(goal) = var("FITFUSION_WATER_GOAL_ML") {
            if let Ok(g) = goal.parse() {
                self.water.daily_goal_ml = g;
            }
        }

        // Logging overrides
        if let Some(level) = var("FITFUSION_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("FITFUSION_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# FitFusion Configuration
#
# Environment variables override these settings:
# - FITFUSION_BACKEND_URL
# - FITFUSION_PLAN_SERVICE_URL
# - FITFUSION_TIMEOUT_SECS
# - FITFUSION_SESSION_FILE
# - FITFUSION_WATER_GOAL_ML
# - FITFUSION_LOG_LEVEL
# - FITFUSION_LOG_FORMAT

[backend]
# FitFusion backend origin
url = "https://health4-lmzi.onrender.com"

# Workout plan generator (pinged before generating a plan)
plan_service_url = "https://workout-plan-app.onrender.com"

# Request timeout in seconds
request_timeout_secs = 30

[session]
# Where the session token is stored (default: user config directory)
# token_file = "~/.config/fitfusion/session"

[water]
# Daily water goal in milliliters
daily_goal_ml = 2000

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for machine consumption)
format = "pretty"
"#
    .to_string()
}
