//! Operational probes: liveness, store readiness, build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn live() -> Json<Probe> {
    Json(Probe {
        status: "ok",
        store: None,
    })
}

/// 503 while the user store cannot answer a trivial query.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Probe>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Probe {
                status: "ok",
                store: Some("reachable"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "store not reachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Probe {
                    status: "degraded",
                    store: Some("unreachable"),
                }),
            )
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
