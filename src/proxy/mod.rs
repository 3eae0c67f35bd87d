//! The authenticated backend proxy.
//!
//! Every /api route reduces to one call through [`Backend::forward`]: build
//! the backend URL, issue exactly one request with the session's bearer
//! token, and relay status and body back unchanged. Failures never escape as
//! raw errors; transport and parse problems collapse into a 500 with the
//! route's static fallback message. Single attempt, fail fast - no retries,
//! no caching, no circuit breaking.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;
use url::Url;

pub use reqwest::Method;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// A relayed backend response: the status and JSON body handed downstream.
#[derive(Debug)]
pub struct Relay {
    pub status: StatusCode,
    pub body: Value,
}

impl Relay {
    /// The generic 500 used when the backend is unreachable or talks garbage.
    pub fn fallback(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "message": message }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    async fn from_backend(resp: reqwest::Response, fallback: &str) -> Self {
        let status = StatusCode::from_u16(resp.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let text = match resp.text().await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = %err, "failed to read backend response body");
                return Self::fallback(fallback);
            }
        };

        if status.is_success() {
            // Success bodies relay verbatim; anything unparseable is a 500.
            match serde_json::from_str::<Value>(&text) {
                Ok(body) => Self { status, body },
                Err(err) => {
                    tracing::error!(%status, error = %err, "backend returned non-JSON success body");
                    Self::fallback(fallback)
                }
            }
        } else {
            // Error status passes through; plain-text bodies get the
            // `{ message }` wrapper the UI expects.
            let body = match serde_json::from_str::<Value>(&text) {
                Ok(body) => body,
                Err(_) if !text.trim().is_empty() => json!({ "message": text.trim() }),
                Err(_) => json!({ "message": fallback }),
            };
            Self { status, body }
        }
    }
}

impl IntoResponse for Relay {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// HTTP client for the platform backend.
#[derive(Debug, Clone)]
pub struct Backend {
    client: reqwest::Client,
    base_url: Url,
}

impl Backend {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    /// Backend URL for a resource path, with the incoming query string
    /// forwarded verbatim.
    fn url(&self, path: &str, query: Option<&str>) -> String {
        let mut url = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        match query {
            Some(q) if !q.is_empty() => {
                url.push('?');
                url.push_str(q);
            }
            _ => {}
        }
        url
    }

    /// Relay an authenticated request: one outbound call carrying
    /// `Authorization: Bearer <token>`, response handed back as-is.
    pub async fn forward(
        &self,
        token: &str,
        method: Method,
        path: &str,
        query: Option<&str>,
        body: Option<Value>,
        fallback: &str,
    ) -> Relay {
        let url = self.url(path, query);

        let mut request = self.client.request(method, &url).bearer_auth(token);
        if let Some(body) = body {
            request = request.json(&body);
        }

        match request.send().await {
            Ok(resp) => Relay::from_backend(resp, fallback).await,
            Err(err) => {
                tracing::error!(%url, error = %err, "backend request failed");
                Relay::fallback(fallback)
            }
        }
    }

    /// Unauthenticated POST, used by login before any session exists.
    pub async fn post_public(&self, path: &str, body: Value, fallback: &str) -> Relay {
        let url = self.url(path, None);

        match self.client.post(&url).json(&body).send().await {
            Ok(resp) => Relay::from_backend(resp, fallback).await,
            Err(err) => {
                tracing::error!(%url, error = %err, "backend request failed");
                Relay::fallback(fallback)
            }
        }
    }
}
