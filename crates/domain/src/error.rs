//! Common error type used across the workspace.
//!
//! Each layer keeps its own typed error and converts into [`MikroDashError`]
//! via `#[from]` at the port boundary.

use crate::router::RouterError;
use crate::session::SessionTokenError;

/// Top-level error for the sign-in flow.
///
/// Input-shape problems never get this far: they are reported as
/// [`LoginErrors`](crate::credentials::LoginErrors) before any IO happens.
#[derive(Debug, thiserror::Error)]
pub enum MikroDashError {
    /// The router rejected the credentials or could not be reached.
    #[error("router error")]
    Router(#[from] RouterError),

    /// Browser storage failed.
    #[error("storage error")]
    Storage(#[from] StorageError),

    /// A stored session could not be decoded.
    #[error("session error")]
    Session(#[from] SessionTokenError),
}

impl MikroDashError {
    /// Text shown to the user in an error notification.
    #[must_use]
    pub fn notification(&self) -> String {
        match self {
            Self::Router(err) => err.notification(),
            Self::Storage(err) => format!("Error: {err}"),
            Self::Session(err) => format!("Error: {err}"),
        }
    }
}

/// Failure of a key/value storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend does not exist in this environment (e.g. storage disabled).
    #[error("session storage is unavailable")]
    Unavailable,

    /// The backend refused the operation (quota, security policy, …).
    #[error("session storage failed: {0}")]
    Backend(String),
}
