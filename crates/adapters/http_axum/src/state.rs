//! Shared application state for axum handlers.

use std::path::PathBuf;
use std::sync::Arc;

use mikrodash_domain::config::ClientConfig;

/// Application state shared across all axum handlers.
///
/// Everything is immutable after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Configuration handed to the browser app.
    pub client_config: Arc<ClientConfig>,
    /// Directory holding the built dashboard (`trunk build` output).
    pub dist_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(client_config: ClientConfig, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            client_config: Arc::new(client_config),
            dist_dir: Arc::new(dist_dir.into()),
        }
    }
}
