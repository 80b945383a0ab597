//! Client configuration: what the browser app needs to reach the router.

use serde::{Deserialize, Serialize};

/// Router used when nothing else is configured.
pub const DEFAULT_ROUTER_URL: &str = "https://zt.zvy.me";

/// REST path probed to check credentials.
pub const SYSTEM_RESOURCE_PATH: &str = "/rest/system/resource";

/// Runtime configuration served to the dashboard as `/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the router REST API, without a trailing slash.
    pub router_url: String,
}

impl ClientConfig {
    /// Build a config, normalising and checking the router URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientConfigError`] when the URL is empty, does not use
    /// the `http` or `https` scheme, or carries a query, a fragment, or
    /// whitespace.
    pub fn new(router_url: impl Into<String>) -> Result<Self, ClientConfigError> {
        let config = Self {
            router_url: router_url.into().trim().trim_end_matches('/').to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants on an already-built config (e.g. one deserialized
    /// from the network).
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::new`].
    pub fn validate(&self) -> Result<(), ClientConfigError> {
        if self.router_url.is_empty() {
            return Err(ClientConfigError::Empty);
        }
        let rest = self
            .router_url
            .strip_prefix("https://")
            .or_else(|| self.router_url.strip_prefix("http://"))
            .ok_or_else(|| ClientConfigError::Scheme(self.router_url.clone()))?;
        if rest.is_empty() {
            return Err(ClientConfigError::MissingHost(self.router_url.clone()));
        }
        // The probe path is appended verbatim.
        if rest
            .chars()
            .any(|c| c == '?' || c == '#' || c.is_whitespace())
        {
            return Err(ClientConfigError::NotABase(self.router_url.clone()));
        }
        Ok(())
    }

    /// Full URL of the credential probe.
    #[must_use]
    pub fn system_resource_url(&self) -> String {
        format!("{}{SYSTEM_RESOURCE_PATH}", self.router_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            router_url: DEFAULT_ROUTER_URL.to_string(),
        }
    }
}

/// Invalid client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientConfigError {
    #[error("router url must not be empty")]
    Empty,
    #[error("router url must start with http:// or https://, got {0:?}")]
    Scheme(String),
    #[error("router url has no host: {0:?}")]
    MissingHost(String),
    #[error("router url must not contain a query, a fragment, or whitespace: {0:?}")]
    NotABase(String),
}
