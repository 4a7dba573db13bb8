//! REST calls to the external auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A completed exchange with a non-2xx status is a server error and
//! carries the optional `message` from the response body. A request
//! that does not complete at all is a transport error. A 2xx response
//! is success regardless of body content.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::ApiMessage;
#[cfg(feature = "hydrate")]
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::auth::{LoginForm, RegisterForm};

/// Failure of a submission's network leg.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The exchange completed but the server reported a non-2xx status.
    #[error("server returned status {status}")]
    Server { status: u16, message: Option<String> },
    /// The exchange could not be completed at all.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// Text to surface inline on the form. A server-provided message
    /// wins over the caller's fallback; transport failures all map to
    /// one generic string.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server {
                message: Some(text),
                ..
            } => text.clone(),
            Self::Server { message: None, .. } => fallback.to_owned(),
            Self::Transport(_) => "Network error. Please try again.".to_owned(),
        }
    }
}

/// Map a completed exchange to a submission outcome.
///
/// # Errors
///
/// Any status outside 2xx becomes [`ApiError::Server`] carrying the
/// optional body message.
pub fn status_outcome(status: u16, body: ApiMessage) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Server {
            status,
            message: body.message,
        })
    }
}

/// Submit login credentials to `POST /api/auth/login`.
///
/// # Errors
///
/// [`ApiError::Server`] for non-2xx responses, [`ApiError::Transport`]
/// when the request does not complete.
pub async fn login(form: &LoginForm) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/login", &LoginRequest::from(form)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Submit a registration to `POST /api/auth/register`.
///
/// # Errors
///
/// [`ApiError::Server`] for non-2xx responses, [`ApiError::Transport`]
/// when the request does not complete.
pub async fn register(form: &RegisterForm) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/register", &RegisterRequest::from(form)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// POST a JSON body and map the response through [`status_outcome`].
///
/// The body is only parsed for non-2xx responses; a success with an
/// unparseable body is still a success.
#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<(), ApiError> {
    let response = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            leptos::logging::warn!("auth request to {url} failed: {e}");
            ApiError::Transport(e.to_string())
        })?;

    let body = if response.ok() {
        ApiMessage::default()
    } else {
        response.json::<ApiMessage>().await.unwrap_or_default()
    };
    status_outcome(response.status(), body)
}
