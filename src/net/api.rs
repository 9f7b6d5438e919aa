//! Authentication API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `HttpAuthApi` reports
//! `ApiError::Unavailable`, since login only happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`ApiError`]; the session layer forwards
//! it to the login page untouched and never retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::types::{Credentials, LoginResponse};
use crate::config::ClientConfig;

pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{}", status_message(*status, detail.as_deref()))]
    Status { status: u16, detail: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("login request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("authentication api not available on server")]
    Unavailable,
}

fn status_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => detail.to_owned(),
        None => format!("login failed: {status}"),
    }
}

/// Login collaborator. Mocked in tests; `HttpAuthApi` in the browser.
#[async_trait::async_trait(?Send)]
pub trait AuthApi: Send + Sync {
    /// Exchange an email + password for an access token and user record.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for rejected credentials, transport failures,
    /// malformed responses, or timeouts.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
}

/// `POST {api_base_url}/auth/login` with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    config: ClientConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        self.config.endpoint(LOGIN_PATH)
    }
}

/// Build a status error, lifting `detail` out of a JSON error body when the
/// backend sends one.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| match value.get("detail")? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
            _ => None,
        })
        .filter(|detail| !detail.trim().is_empty());
    ApiError::Status { status, detail }
}

#[cfg(feature = "hydrate")]
async fn send_login(url: &str, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(credentials)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(resp.status(), &body));
    }
    resp.json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let url = self.login_url();
            let request = Box::pin(send_login(&url, credentials));
            let timeout = Box::pin(gloo_timers::future::sleep(self.config.login_timeout));
            match select(request, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(ApiError::Timeout(self.config.login_timeout)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }
}
