//! Common routes: service info, health, readiness.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

const SERVICE_NAME: &str = "寵物領養平台 API";

#[derive(Serialize)]
struct RootBody {
    name: &'static str,
    version: &'static str,
    docs: &'static str,
    health: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    backend: &'static str,
}

async fn root() -> Json<RootBody> {
    Json(RootBody {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        docs: "/docs",
        health: "/health",
    })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy",
        message: "寵物領養平台 API 運行正常",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Probes the table backend with a one-row read.
async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    let backend = state.db.backend_kind();
    match state.db.table("pets").select("id").limit(1).execute().await {
        Ok(_) => Ok(Json(ReadyBody { status: "ok", backend })),
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    backend,
                }),
            ))
        }
    }
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
