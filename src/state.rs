//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used to reach the POS backend and the
//! backend's API base URL. The host keeps no conversation state of its own;
//! sessions are owned by the browser and the backend.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build the state from host config.
    ///
    /// Only connecting is bounded by default; a request timeout applies only
    /// when one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let mut builder =
            reqwest::Client::builder().connect_timeout(Duration::from_secs(config.timeouts.connect_secs));
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::with_client(builder.build()?, &config.backend_url))
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client, backend_url: &str) -> Self {
        Self {
            http,
            backend_url: Arc::from(backend_url.trim_end_matches('/')),
        }
    }

    #[must_use]
    pub fn backend_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}
