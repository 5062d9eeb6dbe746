use axum::{
    extract::{Extension, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::auth::AuthToken;
use crate::server::app::AppState;

/// Authenticated user resolved from the bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Token authentication middleware
///
/// Resolves the token in the Authorization header to a user and adds
/// `AuthUser` to request extensions. Requests without a valid token are
/// rejected with 401.
pub async fn token_auth_middleware(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(request.headers())
        .ok_or(ApiError::AuthenticationRequired)?
        .to_string();

    let user = AuthToken::find_user_by_key(&token, &state.db_pool)
        .await?
        .ok_or(ApiError::InvalidToken)?;

    debug!("Authenticated user: {}", user.username);
    request.extensions_mut().insert(AuthUser {
        user_id: user.id,
        username: user.username,
    });

    Ok(next.run(request).await)
}

/// Token from the Authorization header.
///
/// Accepts "Bearer <key>", "Token <key>" and a raw key.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get("authorization")?.to_str().ok()?.trim();

    let token = auth_str
        .strip_prefix("Bearer ")
        .or_else(|| auth_str.strip_prefix("Token "))
        .unwrap_or(auth_str)
        .trim();

    (!token.is_empty()).then_some(token)
}
