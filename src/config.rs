//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines
//! constants for cache headers, logging defaults, and the environment
//! variables recognized at startup. `AppConfig` is the root configuration
//! struct; every field has a built-in default so the service runs with no
//! config file at all.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// The greeting is constant content, safe for upstream caches to hold briefly.
pub const HTTP_CACHE_GREETING_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_GREETING: &str =
    formatcp!("public, max-age={}", HTTP_CACHE_GREETING_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "greeter=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

// =============================================================================
// Environment Variables
// =============================================================================
// Read in main() only; the rest of the crate takes resolved values.

/// Overrides the listener port
pub const ENV_PORT: &str = "PORT";

/// Selects the run mode; [`RUN_MODE_TEST`] suppresses listener startup
pub const ENV_RUN_MODE: &str = "GREETER_ENV";

/// Run mode value under which no socket is bound
pub const RUN_MODE_TEST: &str = "test";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        3000
    }

    /// The `"host:port"` string the listener binds to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads [`DEFAULT_CONFIG_PATH`] if it exists, otherwise built-in defaults.
    ///
    /// Only an explicitly passed path is required to exist; the default file
    /// is optional.
    pub fn load_default() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::load(DEFAULT_CONFIG_PATH)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "Unknown logging format '{other}', expected \"text\" or \"json\""
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.logging.format, "text");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn addr_formatting() {
        let config = HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str("[http]\nport = 8080\n").unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn load_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greeter.toml");
        std::fs::write(
            &path,
            "[http]\nhost = \"127.0.0.1\"\nport = 8080\n\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert!(config.logging.is_json());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = AppConfig::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn unknown_logging_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greeter.toml");
        std::fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
