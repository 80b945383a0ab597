//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `mikrodash.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use mikrodash_domain::config::{ClientConfig, ClientConfigError, DEFAULT_ROUTER_URL};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Router the dashboard signs in against.
    pub router: RouterConfig,
    /// Dashboard bundle settings.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
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

/// Router REST API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Base URL of the router REST API (e.g. `https://192.168.88.1`).
    pub url: String,
}

/// Where the built dashboard lives.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Output directory of `trunk build`.
    pub dist_dir: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `mikrodash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("mikrodash.toml")?;
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
        if let Ok(val) = std::env::var("MIKRODASH_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("MIKRODASH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("MIKRODASH_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("MIKRODASH_ROUTER_URL") {
            self.router.url = val;
        }
        if let Ok(val) = std::env::var("MIKRODASH_DIST_DIR") {
            self.dashboard.dist_dir = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("MIKRODASH_LOG") {
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
        self.client_config()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the configuration served to the browser app.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Router`] when the router URL is invalid.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        Ok(ClientConfig::new(self.router.url.as_str())?)
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

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ROUTER_URL.to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("crates/adapters/dashboard_leptos/dist"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "mikrodashd=info,mikrodash=info,tower_http=debug".to_string(),
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
    /// Invalid router URL.
    #[error("invalid router configuration")]
    Router(#[from] ClientConfigError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
