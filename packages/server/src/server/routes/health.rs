use std::time::Instant;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    database: DatabaseHealth,
    pool_size: u32,
    pool_idle: usize,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    reachable: bool,
    latency_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint: database round-trip plus pool utilization.
///
/// Returns 200 when the database answers within 5 seconds, 503 otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let started = Instant::now();
    let ping = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        sqlx::query("SELECT 1").execute(&state.db_pool),
    )
    .await;

    let database = match ping {
        Ok(Ok(_)) => DatabaseHealth {
            reachable: true,
            latency_ms: started.elapsed().as_millis(),
            error: None,
        },
        Ok(Err(e)) => DatabaseHealth {
            reachable: false,
            latency_ms: started.elapsed().as_millis(),
            error: Some(e.to_string()),
        },
        Err(_) => DatabaseHealth {
            reachable: false,
            latency_ms: started.elapsed().as_millis(),
            error: Some("query timeout (>5s)".to_string()),
        },
    };

    let status_code = if database.reachable {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if database.reachable { "healthy" } else { "unhealthy" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        pool_size: state.db_pool.size(),
        pool_idle: state.db_pool.num_idle(),
    };

    (status_code, Json(response))
}
