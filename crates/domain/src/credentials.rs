//! Credentials: the router user name and password entered at login.

use std::fmt;

use crate::session::SessionToken;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Reason a single form field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The field was left empty.
    Required,
    /// The field holds fewer than `min` characters.
    TooShort { min: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("This field is required"),
            Self::TooShort { min } => write!(f, "Minimum {min} characters"),
        }
    }
}

/// Per-field validation outcome of a login attempt.
///
/// A field is `None` when it passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("invalid login input")]
pub struct LoginErrors {
    pub user: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl LoginErrors {
    /// Whether every field passed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.password.is_none()
    }
}

/// A validated user name / password pair.
///
/// Fields are private so a `Credentials` value always satisfies the input
/// rules checked by [`Credentials::new`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    /// Validate raw form input and build credentials.
    ///
    /// Both fields are required; the password must hold at least
    /// [`MIN_PASSWORD_LEN`] characters. The input is taken as typed, without
    /// trimming.
    ///
    /// # Errors
    ///
    /// Returns [`LoginErrors`] describing every offending field.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Result<Self, LoginErrors> {
        let user = user.into();
        let password = password.into();

        let errors = LoginErrors {
            user: validate_user(&user),
            password: validate_password(&password),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self { user, password })
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Encode as the session token `base64("user:password")`.
    #[must_use]
    pub fn to_token(&self) -> SessionToken {
        SessionToken::encode(&self.user, &self.password)
    }

    /// Value for an HTTP `Authorization` header using Basic auth.
    #[must_use]
    pub fn basic_auth_header(&self) -> String {
        format!("Basic {}", self.to_token().as_str())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"********")
            .finish()
    }
}

fn validate_user(user: &str) -> Option<FieldError> {
    if user.is_empty() {
        return Some(FieldError::Required);
    }
    None
}

fn validate_password(password: &str) -> Option<FieldError> {
    if password.is_empty() {
        return Some(FieldError::Required);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some(FieldError::TooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    None
}
