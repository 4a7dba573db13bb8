//! Wire payloads for the auth endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::auth::{LoginForm, RegisterForm};

/// Body of `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a LoginForm> for LoginRequest<'a> {
    fn from(form: &'a LoginForm) -> Self {
        Self {
            email: &form.email,
            password: &form.password,
        }
    }
}

/// Body of `POST /api/auth/register`.
///
/// Deliberately has no `confirm_password` field: the confirmation is
/// validated locally and never transmitted.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub address: &'a str,
    pub phone: &'a str,
}

impl<'a> From<&'a RegisterForm> for RegisterRequest<'a> {
    fn from(form: &'a RegisterForm) -> Self {
        Self {
            email: &form.email,
            password: &form.password,
            address: &form.address,
            phone: &form.phone,
        }
    }
}

/// The part of an auth response body this client reads. Both endpoints
/// may attach a human-readable `message`; everything else in the body
/// is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
