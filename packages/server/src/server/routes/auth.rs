use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::common::ApiError;
use crate::domains::auth::{login, LoginResult};
use crate::server::app::AppState;

/// Missing fields are treated as empty strings and fail authentication.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /login/
pub async fn login_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    match login(&request.username, &request.password, &state.db_pool).await? {
        LoginResult::Authenticated { token } => Ok(Json(LoginResponse { token })),
        LoginResult::Rejected => Err(ApiError::InvalidCredentials),
    }
}
