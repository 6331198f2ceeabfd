/// HTTP plumbing for the recipes API
///
/// Services talk to the backend through the `Transport` trait so they can be
/// driven by the real reqwest client in the app and by in-memory fakes in tests.
use crate::state::SessionContext;
use crate::utils::errors::TransportError;
use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::Arc;

/// One JSON request against the recipes API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: Method::GET,
            url,
            body: None,
        }
    }

    pub fn post(url: String, body: Value) -> Self {
        Self {
            method: Method::POST,
            url,
            body: Some(body),
        }
    }

    pub fn delete(url: String) -> Self {
        Self {
            method: Method::DELETE,
            url,
            body: None,
        }
    }
}

/// Issues a single request and hands back the decoded JSON body.
///
/// `Ok(None)` means the server answered successfully with an empty body.
/// Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, TransportError>;
}

/// reqwest-backed transport with a cookie store, so the session cookie the
/// backend sets at login travels with every request
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client for `session`, pre-seeding its session cookie if one was configured
    pub fn new(session: &SessionContext) -> Result<Self, TransportError> {
        let jar = Arc::new(Jar::default());

        if let Some(cookie) = session.session_cookie() {
            let origin = url::Url::parse(session.server_domain())
                .map_err(|_| TransportError::InvalidUrl(session.server_domain().to_string()))?;
            jar.add_cookie_str(cookie, &origin);
            log::debug!("[Http] Seeded session cookie for {}", origin);
        }

        let client = Client::builder()
            .cookie_provider(jar)
            .build()
            .map_err(|e| TransportError::Network(format!("failed to build client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, TransportError> {
        let ApiRequest { method, url, body } = request;

        log::debug!("[Http] Starting request {} {}", method, url);

        let mut builder = self
            .client
            .request(method.clone(), url.as_str())
            .header(ACCEPT, "application/json");
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::error!("[Http] Request error {} {}: {}", method, url, e);
            if e.is_builder() {
                TransportError::InvalidUrl(url.clone())
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        log::debug!("[Http] Response {} for {} {}", status, method, url);

        let text = response.text().await.map_err(|e| {
            log::error!("[Http] Failed to read body of {} {}: {}", method, url, e);
            TransportError::Network(e.to_string())
        })?;

        if !status.is_success() {
            log::error!("[Http] Response error {} for {} {}", status, method, url);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        decode_body(&text)
    }
}

/// Empty bodies decode to `None`; anything else must be JSON
pub(crate) fn decode_body(text: &str) -> Result<Option<Value>, TransportError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| TransportError::Decode(e.to_string()))
}
