use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    http::{header, HeaderMap, Method},
    routing::get,
    Router,
};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use sharetext_shared::constants::HOME_BODY;
use sharetext_shared::types::SubmitRequest;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::store::MessageStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MessageStore>,
    pub config: Arc<ServerConfig>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(home).post(submit_message))
        .route("/view", get(view_current))
        .route("/view/:id", get(view_by_id))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> &'static str {
    HOME_BODY
}

async fn view_current(State(state): State<AppState>) -> String {
    state.store.retrieve(None).await
}

async fn view_by_id(State(state): State<AppState>, Path(id): Path<String>) -> String {
    state.store.retrieve(Some(&id)).await
}

async fn submit_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String, ServerError> {
    let req = parse_submit_body(&headers, &body)?;
    state.store.submit(&req).await
}

/// Only JSON object bodies are read; any other body (non-JSON content type,
/// arrays, scalars) counts as an empty object and so fails validation rather
/// than decoding. A repeated key keeps its last value.
fn parse_submit_body(headers: &HeaderMap, body: &[u8]) -> Result<SubmitRequest, ServerError> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            let ct = ct.to_ascii_lowercase();
            ct.starts_with("application/json") || ct.contains("+json")
        })
        .unwrap_or(false);

    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SubmitRequest::default());
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| ServerError::BadRequest(e.to_string()))?;
    if !value.is_object() {
        return Ok(SubmitRequest::default());
    }

    serde_json::from_value(value).map_err(|e| ServerError::BadRequest(e.to_string()))
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting HTTP API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
