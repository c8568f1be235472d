//! HTTP surface: liveness, health, and the webhook callback route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::core::config::AppConfig;
use crate::dispatch::Dispatcher;
use crate::errors::BotError;
use crate::webhook::parser;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub dispatcher: Arc<Dispatcher>,
}

#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/callback", post(callback))
        .with_state(state)
}

/// Bind and serve until the process is terminated.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Hello, World!" }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "handlers": state.dispatcher.handler_count(),
        "stats": state.dispatcher.stats_snapshot(),
    }))
}

/// Webhook receiver.
///
/// Verifies the signature and classifies the payload, then acknowledges the
/// platform immediately while a detached task runs the fan-out. A handler
/// outcome never changes the HTTP response; only a bad signature (400) or a
/// malformed envelope (500) rejects a delivery. Work detached here is not
/// drained on shutdown.
async fn callback(State(state): State<AppState>, headers: HeaderMap, body: String) -> Response {
    let request_id = Uuid::new_v4();
    let signature = headers
        .get("x-line-signature")
        .and_then(|value| value.to_str().ok());

    match parser::parse(&body, signature, &state.config.channel_secret) {
        Ok(events) => {
            info!(%request_id, events = events.len(), "webhook accepted");
            let dispatcher = state.dispatcher.clone();
            tokio::spawn(async move {
                dispatcher.process(events).await;
            });
            (StatusCode::OK, "OK").into_response()
        }
        Err(BotError::InvalidSignature) => {
            warn!(%request_id, "webhook rejected: invalid signature");
            (StatusCode::BAD_REQUEST, "Invalid signature").into_response()
        }
        Err(e) => {
            error!(%request_id, "webhook rejected: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
