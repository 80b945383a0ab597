//! Which router the app talks to, as resolved at startup.
//!
//! The endpoint comes from the daemon's runtime configuration. Until that
//! request settles the app does not know where credentials should go, so
//! sign-in is refused while the endpoint is [`RouterEndpoint::Loading`].

use std::fmt::Display;

use mikrodash_domain::config::ClientConfig;

/// Resolution state of the router endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RouterEndpoint {
    /// The runtime configuration has not arrived yet.
    #[default]
    Loading,
    /// Configured by the daemon.
    Ready(ClientConfig),
    /// The runtime configuration could not be loaded; the built-in default
    /// router is used instead.
    Fallback(ClientConfig),
}

impl RouterEndpoint {
    /// Settle the endpoint from the outcome of loading the runtime
    /// configuration.
    pub fn resolve<E: Display>(loaded: Result<ClientConfig, E>) -> Self {
        match loaded {
            Ok(config) => Self::Ready(config),
            Err(err) => {
                tracing::warn!(error = %err, "using default router endpoint");
                Self::Fallback(ClientConfig::default())
            }
        }
    }

    /// The router to sign in against, or `None` while still loading.
    #[must_use]
    pub fn config(&self) -> Option<&ClientConfig> {
        match self {
            Self::Loading => None,
            Self::Ready(config) | Self::Fallback(config) => Some(config),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}
