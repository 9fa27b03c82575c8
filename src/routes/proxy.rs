//! Forwarding of `/api/agent` and `/api/health` to the POS backend.
//!
//! ERROR HANDLING
//! ==============
//! Upstream status codes and JSON bodies are relayed verbatim, so backend
//! errors reach the browser exactly as the backend reported them. A failure
//! to reach the backend at all becomes a bare `502` with no body: the browser
//! cannot decode it and reports its fixed transport-failure message, so the
//! upstream address never reaches the page.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use protocol::AgentRequest;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "backend unreachable");
        StatusCode::BAD_GATEWAY.into_response()
    }
}

/// `POST /api/agent` → `POST {backend}/agent`.
pub async fn agent(State(state): State<AppState>, Json(request): Json<AgentRequest>) -> Result<Response, ProxyError> {
    tracing::info!(
        merchant_id = %request.merchant_id,
        has_session = request.session_id.is_some(),
        "forwarding agent query"
    );
    let resp = state
        .http
        .post(state.backend_endpoint("agent"))
        .json(&request)
        .send()
        .await?;
    relay(resp).await
}

/// `GET /api/health` → `GET {backend}/health`.
pub async fn health(State(state): State<AppState>) -> Result<Response, ProxyError> {
    let resp = state.http.get(state.backend_endpoint("health")).send().await?;
    relay(resp).await
}

async fn relay(resp: reqwest::Response) -> Result<Response, ProxyError> {
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    if !status.is_success() {
        tracing::warn!(%status, "backend returned error status");
    }
    let body = resp.bytes().await?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}
