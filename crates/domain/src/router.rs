//! Router REST contracts: error bodies, the system resource payload, and
//! the failure modes of a call to the router.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status the router answers a successful probe with.
pub const STATUS_OK: u16 = 200;

/// The `error` field of a router error body.
///
/// RouterOS sends the HTTP status as a number (`"error": 401`); proxies in
/// front of it sometimes send a string instead. Anything else is kept as its
/// JSON rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    Numeric(u16),
    Text(String),
    Other(String),
}

impl ErrorCode {
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Number(number) => Some(
                number
                    .as_u64()
                    .and_then(|code| u16::try_from(code).ok())
                    .map_or_else(|| Self::Other(number.to_string()), Self::Numeric),
            ),
            other => Some(Self::Other(other.to_string())),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(code) => code.fmt(f),
            Self::Text(text) | Self::Other(text) => f.write_str(text),
        }
    }
}

/// JSON body returned by the router on non-2xx responses.
///
/// Every field is read on its own: a field that is missing or of an
/// unexpected type is `None` without affecting the others. A body that is
/// not a JSON object parses to [`RouterErrorBody::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterErrorBody {
    pub error: Option<ErrorCode>,
    pub message: Option<String>,
    pub detail: Option<String>,
}

fn text_field(value: &Value) -> Option<String> {
    value.as_str().map(ToString::to_string)
}

impl RouterErrorBody {
    /// Parse a raw response body leniently.
    #[must_use]
    pub fn parse(body: &[u8]) -> Self {
        let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };
        Self {
            error: fields.get("error").and_then(ErrorCode::from_json),
            message: fields.get("message").and_then(text_field),
            detail: fields.get("detail").and_then(text_field),
        }
    }

    /// Join `error` and `message` (the fields present) with a space.
    ///
    /// Returns `None` when neither is present.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<String> = [
            self.error.as_ref().map(ToString::to_string),
            self.message.clone(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// The subset of `GET /rest/system/resource` that the dashboard reads.
///
/// RouterOS reports every value as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SystemResource {
    pub board_name: Option<String>,
    pub version: Option<String>,
    pub uptime: Option<String>,
    pub cpu_load: Option<String>,
    pub architecture_name: Option<String>,
}

impl SystemResource {
    /// Parse a raw response body leniently.
    #[must_use]
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Interpret the router's answer to a probe.
    ///
    /// Only [`STATUS_OK`] counts as success, whatever the body holds. Any
    /// other status is a rejection carrying the leniently parsed body.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Rejected`] for every status other than 200.
    pub fn from_response(status: u16, body: &[u8]) -> Result<Self, RouterError> {
        if status == STATUS_OK {
            Ok(Self::parse(body))
        } else {
            Err(RouterError::Rejected {
                status,
                body: RouterErrorBody::parse(body),
            })
        }
    }

    /// Short human label such as `hAP ax2 (RouterOS 7.14 (stable))`.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        match (&self.board_name, &self.version) {
            (Some(board), Some(version)) => Some(format!("{board} (RouterOS {version})")),
            (Some(board), None) => Some(board.clone()),
            (None, Some(version)) => Some(format!("RouterOS {version}")),
            (None, None) => None,
        }
    }
}

/// Failure of a single request to the router.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// The router answered with a status other than 200.
    #[error("router answered with status {status}")]
    Rejected { status: u16, body: RouterErrorBody },

    /// The request never produced a response (DNS, TLS, CORS, offline, …).
    #[error("network error: {0}")]
    Network(String),
}

impl RouterError {
    /// Text shown to the user in an error notification.
    #[must_use]
    pub fn notification(&self) -> String {
        match self {
            Self::Rejected { status, body } => match body.summary() {
                Some(summary) => format!("Error: {summary}"),
                None => format!("Error: HTTP {status}"),
            },
            Self::Network(message) => format!("Error: {message}"),
        }
    }
}
