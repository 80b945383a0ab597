//! Session token: the credential blob kept in browser session storage.

use std::fmt;

use base64::prelude::*;

use crate::credentials::{Credentials, LoginErrors};

/// Session-storage key under which the token is kept.
pub const SESSION_KEY: &str = "auth";

/// Standard base64 encoding of `"user:password"`.
///
/// This is the same value sent in an HTTP Basic `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Encode a user name and password.
    #[must_use]
    pub fn encode(user: &str, password: &str) -> Self {
        Self(BASE64_STANDARD.encode(format!("{user}:{password}")))
    }

    /// Wrap a token read back from storage without decoding it.
    #[must_use]
    pub fn from_stored(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Access the encoded form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back into validated credentials.
    ///
    /// The payload is split on the first `:`, matching how HTTP Basic auth
    /// separates user id and password.
    ///
    /// # Errors
    ///
    /// Returns [`SessionTokenError`] when the token is not base64, not UTF-8,
    /// has no separator, or decodes to credentials that fail validation.
    pub fn decode(&self) -> Result<Credentials, SessionTokenError> {
        let bytes = BASE64_STANDARD.decode(&self.0)?;
        let plain = String::from_utf8(bytes)?;
        let (user, password) = plain
            .split_once(':')
            .ok_or(SessionTokenError::MissingSeparator)?;
        Ok(Credentials::new(user, password)?)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Failure to turn a stored token back into credentials.
#[derive(Debug, thiserror::Error)]
pub enum SessionTokenError {
    #[error("session token is not valid base64")]
    Base64(#[from] base64::DecodeError),
    #[error("session token is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("session token has no user/password separator")]
    MissingSeparator,
    #[error("session token holds invalid credentials")]
    Invalid(#[from] LoginErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_user_and_password() {
        let token = SessionToken::encode("admin", "password");
        assert_eq!(token.as_str(), "YWRtaW46cGFzc3dvcmQ=");
    }

    #[test]
    fn should_decode_token_from_credentials() {
        let creds = Credentials::new("noc", "c0rrect-horse").unwrap();
        let restored = SessionToken::from_stored(creds.to_token().as_str()).decode().unwrap();
        assert_eq!(restored, creds);
    }

    #[test]
    fn should_keep_colons_inside_password() {
        let token = SessionToken::encode("admin", "pass:word:1");
        let creds = token.decode().unwrap();
        assert_eq!(creds.user(), "admin");
        assert_eq!(creds.password(), "pass:word:1");
    }

    #[test]
    fn should_reject_non_base64_token() {
        let result = SessionToken::from_stored("not base64!").decode();
        assert!(matches!(result, Err(SessionTokenError::Base64(_))));
    }

    #[test]
    fn should_reject_token_without_separator() {
        let raw = BASE64_STANDARD.encode("adminpassword");
        let result = SessionToken::from_stored(raw).decode();
        assert!(matches!(result, Err(SessionTokenError::MissingSeparator)));
    }

    #[test]
    fn should_reject_token_with_short_password() {
        let result = SessionToken::encode("admin", "short").decode();
        assert!(matches!(result, Err(SessionTokenError::Invalid(_))));
    }

    #[test]
    fn should_hide_token_in_debug_output() {
        let token = SessionToken::encode("admin", "password");
        assert_eq!(format!("{token:?}"), "SessionToken(..)");
    }
}
