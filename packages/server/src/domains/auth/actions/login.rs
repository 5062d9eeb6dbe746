//! Login action

use anyhow::Result;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::domains::auth::models::{AuthToken, User};

/// Result of a login attempt
#[derive(Debug)]
pub enum LoginResult {
    Authenticated { token: String },
    Rejected,
}

/// Check credentials and get-or-create the user's bearer token.
///
/// Unknown usernames and wrong passwords are indistinguishable to the caller.
pub async fn login(username: &str, password: &str, pool: &PgPool) -> Result<LoginResult> {
    let Some(user) = User::authenticate(username, password, pool).await? else {
        debug!("Rejected login for {}", username);
        return Ok(LoginResult::Rejected);
    };

    let (token, token_created) = AuthToken::get_or_create_for_user(user.id, pool).await?;
    if token_created {
        info!("Issued new token for user {}", user.username);
    }

    Ok(LoginResult::Authenticated { token: token.key })
}
