use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::server::app::AppState;

const DB_PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: DatabaseHealth,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// GET /health
///
/// 200 when the jobs database answers a ping, 503 otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match ping_database(&state.db_pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: DatabaseHealth {
                    status: "ok",
                    error: None,
                },
            }),
        ),
        Err(error) => {
            tracing::warn!("Health check failed: {}", error);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    database: DatabaseHealth {
                        status: "error",
                        error: Some(error),
                    },
                }),
            )
        }
    }
}

async fn ping_database(pool: &PgPool) -> Result<(), String> {
    match tokio::time::timeout(DB_PING_TIMEOUT, sqlx::query("SELECT 1").execute(pool)).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(format!("Query failed: {}", e)),
        Err(_) => Err(format!("Query timeout (>{}s)", DB_PING_TIMEOUT.as_secs())),
    }
}
