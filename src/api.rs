//! Liveness HTTP server for uptime monitors.
//!
//! The original deployment sat behind a free-tier host that sleeps idle
//! services, so a pingable home route keeps the bot awake. Spawned as a
//! background task in the gateway.

use axum::{extract::State, response::Json, routing::get, Router};
use banwatch_core::config::ApiConfig;
use banwatch_core::traits::Channel;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// State handed to every route handler.
#[derive(Clone)]
pub struct ApiState {
    channels: HashMap<String, Arc<dyn Channel>>,
    /// Shown until a channel learns its platform identity.
    fallback_name: String,
    uptime: Instant,
}

/// Display name of the bot account: the first channel that knows its
/// platform identity wins, the configured name otherwise.
async fn bot_display_name(state: &ApiState) -> String {
    for channel in state.channels.values() {
        if let Some(name) = channel.bot_name().await {
            return name;
        }
    }
    state.fallback_name.clone()
}

/// `GET /` — plain text liveness probe.
async fn home(State(state): State<ApiState>) -> String {
    let name = bot_display_name(&state).await;
    format!("Bot {name} is working")
}

/// `GET /api/health` — health check with uptime.
async fn health(State(state): State<ApiState>) -> Json<Value> {
    let uptime_secs = state.uptime.elapsed().as_secs();
    let bot = bot_display_name(&state).await;
    Json(json!({
        "status": "ok",
        "bot": bot,
        "uptime_secs": uptime_secs,
        "channels": state.channels.keys().cloned().collect::<Vec<_>>(),
    }))
}

fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/health", get(health))
        .with_state(state)
}

/// Bind the configured address and serve until the gateway aborts us.
pub async fn serve(
    config: ApiConfig,
    channels: HashMap<String, Arc<dyn Channel>>,
    fallback_name: String,
    uptime: Instant,
) {
    let state = ApiState {
        channels,
        fallback_name,
        uptime,
    };

    let app = build_router(state);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("liveness server could not bind {addr}: {e}");
            return;
        }
    };

    info!("liveness server listening on {addr}");

    if let Err(e) = axum::serve(listener, app).await {
        error!("liveness server exited: {e}");
    }
}
