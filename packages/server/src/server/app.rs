//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::middleware::token_auth_middleware;
use crate::server::routes::{health_handler, list_jobs_handler, login_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router
///
/// `allowed_origins` empty means any origin may call the API.
pub fn build_app(pool: PgPool, allowed_origins: &[String]) -> Router {
    let app_state = AppState { db_pool: pool };

    let cors = CorsLayer::new()
        .allow_origin(cors_origins(allowed_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Token-protected routes
    let protected = Router::new()
        .route("/jobs/", get(list_jobs_handler))
        .route_layer(middleware::from_fn(token_auth_middleware));

    Router::new()
        .route("/login/", post(login_handler))
        .merge(protected)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_origins(allowed_origins: &[String]) -> AllowOrigin {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    }
}
