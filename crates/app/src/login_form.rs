//! Login form state machine.
//!
//! Holds what the user typed, the per-field errors, and the loading flag. The
//! UI renders from this state and feeds events into it; no IO happens here.
//!
//! Errors are first computed on submit. After the first submit every edit
//! re-validates the form, so messages disappear as soon as the input
//! becomes valid.

use mikrodash_domain::credentials::{Credentials, FieldError, LoginErrors};

/// What the UI should do in response to a key press in the user field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move focus to the password input; do not submit.
    FocusPassword,
    /// Let the browser handle the key.
    Default,
}

/// State of the sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    user: String,
    password: String,
    errors: LoginErrors,
    loading: bool,
    submitted: bool,
}

impl LoginForm {
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn user_error(&self) -> Option<FieldError> {
        self.errors.user
    }

    #[must_use]
    pub fn password_error(&self) -> Option<FieldError> {
        self.errors.password
    }

    /// Whether a sign-in request is in flight. Inputs and the submit button
    /// are disabled while this is set.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_user(&mut self, user: String) {
        self.user = user;
        if self.submitted {
            self.revalidate();
        }
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
        if self.submitted {
            self.revalidate();
        }
    }

    /// Map a key press in the user field to an action.
    ///
    /// Enter moves to the password field instead of submitting the form.
    #[must_use]
    pub fn user_key_action(key: &str) -> KeyAction {
        if key == "Enter" {
            KeyAction::FocusPassword
        } else {
            KeyAction::Default
        }
    }

    /// Validate the form and, if valid, enter the loading state.
    ///
    /// Returns the credentials to sign in with, or `None` when validation
    /// failed or a request is already in flight.
    pub fn submit(&mut self) -> Option<Credentials> {
        if self.loading {
            return None;
        }
        self.submitted = true;
        match Credentials::new(self.user.clone(), self.password.clone()) {
            Ok(credentials) => {
                self.errors = LoginErrors::default();
                self.loading = true;
                Some(credentials)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Leave the loading state once the sign-in request settled, whatever
    /// its outcome.
    pub fn finish_submit(&mut self) {
        self.loading = false;
    }

    /// Clear every value and error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn revalidate(&mut self) {
        self.errors = match Credentials::new(self.user.clone(), self.password.clone()) {
            Ok(_) => LoginErrors::default(),
            Err(errors) => errors,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(user: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::default();
        form.set_user(user.to_string());
        form.set_password(password.to_string());
        form
    }

    #[test]
    fn should_start_empty_without_errors() {
        let form = LoginForm::default();
        assert_eq!(form.user(), "");
        assert_eq!(form.password(), "");
        assert!(form.user_error().is_none());
        assert!(form.password_error().is_none());
        assert!(!form.is_loading());
    }

    #[test]
    fn should_not_validate_before_first_submit() {
        let form = filled("", "abc");
        assert!(form.user_error().is_none());
        assert!(form.password_error().is_none());
    }

    #[test]
    fn should_block_submit_when_fields_empty() {
        let mut form = LoginForm::default();

        assert!(form.submit().is_none());

        assert_eq!(form.user_error(), Some(FieldError::Required));
        assert_eq!(form.password_error(), Some(FieldError::Required));
        assert!(!form.is_loading());
    }

    #[test]
    fn should_block_submit_when_password_short() {
        let mut form = filled("admin", "short");

        assert!(form.submit().is_none());

        assert!(form.user_error().is_none());
        assert_eq!(form.password_error(), Some(FieldError::TooShort { min: 8 }));
    }

    #[test]
    fn should_enter_loading_state_on_valid_submit() {
        let mut form = filled("admin", "password");

        let credentials = form.submit().unwrap();

        assert_eq!(credentials.user(), "admin");
        assert!(form.is_loading());
    }

    #[test]
    fn should_ignore_submit_while_loading() {
        let mut form = filled("admin", "password");
        form.submit().unwrap();

        assert!(form.submit().is_none());
        assert!(form.is_loading());
    }

    #[test]
    fn should_leave_loading_state_when_finished() {
        let mut form = filled("admin", "password");
        form.submit().unwrap();

        form.finish_submit();

        assert!(!form.is_loading());
        assert_eq!(form.user(), "admin");
        assert!(form.submit().is_some());
    }

    #[test]
    fn should_revalidate_on_edit_after_first_submit() {
        let mut form = filled("", "password");
        form.submit();
        assert_eq!(form.user_error(), Some(FieldError::Required));

        form.set_user("admin".to_string());

        assert!(form.user_error().is_none());
    }

    #[test]
    fn should_clear_values_and_errors_on_reset() {
        let mut form = filled("admin", "short");
        form.submit();
        assert!(form.password_error().is_some());

        form.reset();

        assert_eq!(form, LoginForm::default());
    }

    #[test]
    fn should_focus_password_on_enter_in_user_field() {
        assert_eq!(LoginForm::user_key_action("Enter"), KeyAction::FocusPassword);
    }

    #[test]
    fn should_not_intercept_other_keys() {
        assert_eq!(LoginForm::user_key_action("a"), KeyAction::Default);
        assert_eq!(LoginForm::user_key_action("Tab"), KeyAction::Default);
    }
}
