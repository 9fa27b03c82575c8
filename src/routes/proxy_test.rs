use axum::Router;
use axum::body::to_bytes;
use axum::routing::{get, post};
use client::net::agent::TransportError;
use client::state::chat::{ChatState, TRANSPORT_FAILURE_MESSAGE};
use client::state::view::MessageView;
use protocol::AgentOutcome;
use serde_json::{Value, json};

use super::*;

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}/api")
}

async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}/api")
}

fn state_for(backend_url: &str) -> AppState {
    let http = reqwest::Client::builder().no_proxy().build().expect("client");
    AppState::with_client(http, backend_url)
}

async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

fn request(session_id: Option<&str>) -> AgentRequest {
    AgentRequest {
        query: "top sellers".to_owned(),
        merchant_id: "2".to_owned(),
        session_id: session_id.map(str::to_owned),
    }
}

#[tokio::test]
async fn agent_forwards_body_and_relays_reply() {
    let backend = Router::new().route(
        "/api/agent",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "message": format!("echo {}", body["query"].as_str().unwrap_or_default()),
                "session_id": body.get("session_id").cloned().unwrap_or(json!("new-session")),
                "merchant": body["merchant_id"],
            }))
        }),
    );
    let state = state_for(&spawn_backend(backend).await);

    let resp = agent(State(state), Json(request(None))).await.expect("relay");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "echo top sellers");
    assert_eq!(body["session_id"], "new-session");
    assert_eq!(body["merchant"], "2");
}

#[tokio::test]
async fn agent_forwards_session_id() {
    let backend = Router::new().route(
        "/api/agent",
        post(|Json(body): Json<Value>| async move { Json(json!({ "seen": body.get("session_id").cloned() })) }),
    );
    let state = state_for(&spawn_backend(backend).await);

    let resp = agent(State(state), Json(request(Some("s-77")))).await.expect("relay");
    assert_eq!(json_body(resp).await["seen"], "s-77");
}

#[tokio::test]
async fn agent_relays_error_status_and_body() {
    let backend = Router::new().route(
        "/api/agent",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "merchant_id is required" }))) }),
    );
    let state = state_for(&spawn_backend(backend).await);

    let resp = agent(State(state), Json(request(None))).await.expect("relay");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"], "merchant_id is required");
}

#[tokio::test]
async fn unreachable_backend_maps_to_bare_bad_gateway() {
    let backend_url = unreachable_backend().await;
    let state = state_for(&backend_url);

    let err = agent(State(state), Json(request(None))).await.expect_err("should fail");
    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn unreachable_backend_renders_fixed_failure_message() {
    let state = state_for(&unreachable_backend().await);
    let resp = agent(State(state), Json(request(None))).await.expect_err("should fail").into_response();
    let ok = resp.status().is_success();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");

    // Same decode step the browser transport applies to every reply.
    let result = serde_json::from_slice::<Value>(&bytes)
        .map(|body| AgentOutcome { ok, body })
        .map_err(|e| TransportError::Decode(e.to_string()));

    let mut chat = ChatState::default();
    assert!(chat.begin_query("top sellers", "2").is_some());
    chat.finish_query(result);

    assert_eq!(chat.entries.len(), 2);
    assert_eq!(
        chat.entries[1].view,
        MessageView::System {
            text: TRANSPORT_FAILURE_MESSAGE.to_owned()
        }
    );
}

#[tokio::test]
async fn health_relays_backend_status() {
    let backend = Router::new().route("/api/health", get(|| async { Json(json!({ "status": "healthy" })) }));
    let state = state_for(&spawn_backend(backend).await);

    let resp = health(State(state)).await.expect("relay");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: protocol::HealthResponse = serde_json::from_value(json_body(resp).await).expect("health");
    assert!(body.is_healthy());
}

#[test]
fn backend_endpoint_joins_paths() {
    let state = state_for("http://backend:5000/api/");
    assert_eq!(state.backend_endpoint("agent"), "http://backend:5000/api/agent");
    assert_eq!(state.backend_endpoint("/health"), "http://backend:5000/api/health");
}
