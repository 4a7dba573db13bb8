#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::api::ApiError;
use crate::state::form::{Feedback, FormState};

/// `local@domain.tld` shape: no whitespace or extra `@`, and at least
/// one dot in the domain part.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Optional leading `+`, then digits, spaces, hyphens, or parentheses.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s()-]+$").expect("phone pattern"));

/// Input fields of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Input fields of the register form.
///
/// `confirm_password` exists only for local validation; the wire type
/// in [`crate::net::types`] has no such field, so it never leaves the
/// client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub address: String,
    pub phone: String,
}

/// A locally detected input defect. Blocks the network call; the
/// `Display` string is surfaced to the user verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Confirm password is required")]
    ConfirmPasswordRequired,
    #[error("Address is required")]
    AddressRequired,
    #[error("Phone is required")]
    PhoneRequired,
    #[error("Invalid email format")]
    EmailFormat,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Invalid phone format")]
    PhoneFormat,
}

impl LoginForm {
    /// Check fields in order and report the first failing rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] among: missing email,
    /// missing password, malformed email.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if self.password.trim().is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(ValidationError::EmailFormat);
        }
        Ok(())
    }
}

impl RegisterForm {
    /// Check fields in order and report the first failing rule.
    /// Presence checks for every field come before any format check.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] among: a missing field (in
    /// declaration order), malformed email, short password, password
    /// mismatch, malformed phone.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if self.password.trim().is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        if self.confirm_password.trim().is_empty() {
            return Err(ValidationError::ConfirmPasswordRequired);
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::AddressRequired);
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::PhoneRequired);
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(ValidationError::EmailFormat);
        }
        if self.password.len() < 6 {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if !PHONE_PATTERN.is_match(&self.phone) {
            return Err(ValidationError::PhoneFormat);
        }
        Ok(())
    }
}

/// Where the UI goes after a login attempt resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum LoginResolution {
    /// Credentials accepted; navigate to the dashboard.
    RedirectToDashboard,
    /// Attempt failed; stay on the form and show the feedback.
    Stay,
}

impl FormState<LoginForm> {
    /// Terminal transition for a finished login request.
    ///
    /// Runs on every exit path of the request (success, server error,
    /// transport error), so `submitting` is always released exactly
    /// once. On success the feedback is left untouched; the caller
    /// performs the dashboard redirect.
    pub fn resolve_login(&mut self, result: Result<(), ApiError>) -> LoginResolution {
        self.submitting = false;
        match result {
            Ok(()) => LoginResolution::RedirectToDashboard,
            Err(err) => {
                self.feedback = Some(Feedback::error(err.user_message("Login failed")));
                LoginResolution::Stay
            }
        }
    }
}

impl FormState<RegisterForm> {
    /// Terminal transition for a finished register request.
    ///
    /// On success the fields reset to empty so the user can switch to
    /// the login tab with a clean form. Like login resolution, this
    /// runs on every exit path and always releases `submitting`.
    pub fn resolve_register(&mut self, result: Result<(), ApiError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.fields = RegisterForm::default();
                self.feedback = Some(Feedback::success(
                    "Account created successfully! You can now login.",
                ));
            }
            Err(err) => {
                self.feedback = Some(Feedback::error(err.user_message("Registration failed")));
            }
        }
    }
}
