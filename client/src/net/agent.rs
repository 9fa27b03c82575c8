//! Transport for the `/agent` and `/health` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`TransportError::Unavailable`]
//! since these endpoints are only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx status is not a transport error: the body is still decoded and
//! handed back in [`AgentOutcome`] so the controller can surface the
//! backend's `error` field. Only send and decode failures become
//! [`TransportError`]s, and the controller reports those with one fixed
//! message. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "agent_test.rs"]
mod agent_test;

use protocol::{AgentOutcome, AgentRequest, HealthResponse};

/// Failure of a single request before a usable body was obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// The request/response seam between the chat controller and the backend.
///
/// One call is one attempt; implementations must not retry.
#[allow(async_fn_in_trait)]
pub trait AgentTransport {
    /// `POST {base}/agent` with `request` as the JSON body.
    async fn send_query(&self, request: &AgentRequest) -> Result<AgentOutcome, TransportError>;

    /// `GET {base}/health`.
    async fn check_health(&self) -> Result<HealthResponse, TransportError>;
}

/// Browser transport rooted at an API base path or URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    base: &'static str,
}

impl HttpTransport {
    #[must_use]
    pub const fn new(base: &'static str) -> Self {
        Self { base }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(crate::config::API_BASE)
    }
}

impl AgentTransport for HttpTransport {
    async fn send_query(&self, request: &AgentRequest) -> Result<AgentOutcome, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let url = agent_endpoint(self.base);
            log::debug!("POST {url} merchant={} session={:?}", request.merchant_id, request.session_id);
            let resp = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(|e| TransportError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let ok = resp.ok();
            if !ok {
                log::warn!("agent request returned status {}", resp.status());
            }
            let body = resp
                .json::<serde_json::Value>()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))?;
            Ok(AgentOutcome { ok, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.base, request);
            Err(TransportError::Unavailable)
        }
    }

    async fn check_health(&self) -> Result<HealthResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&health_endpoint(self.base))
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            resp.json::<HealthResponse>()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.base;
            Err(TransportError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn agent_endpoint(base: &str) -> String {
    format!("{}/agent", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn health_endpoint(base: &str) -> String {
    format!("{}/health", base.trim_end_matches('/'))
}
