use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use super::User;

/// Length of an issued token key in hex characters
pub const TOKEN_KEY_LEN: usize = 40;

/// Opaque bearer token, one per user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuthToken {
    pub key: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl AuthToken {
    pub async fn find_by_user(user_id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        let token = sqlx::query_as::<_, AuthToken>("SELECT * FROM auth_tokens WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(token)
    }

    /// Return the user's token, creating one if none exists.
    ///
    /// The bool is true when a new token was inserted.
    pub async fn get_or_create_for_user(user_id: Uuid, pool: &PgPool) -> Result<(Self, bool)> {
        let inserted = sqlx::query_as::<_, AuthToken>(
            r#"
            INSERT INTO auth_tokens (key, user_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(generate_token_key())
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        if let Some(token) = inserted {
            return Ok((token, true));
        }

        let existing = Self::find_by_user(user_id, pool)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Conflicting token vanished for user {}", user_id))?;
        Ok((existing, false))
    }

    /// Resolve a token key to its owner
    pub async fn find_user_by_key(key: &str, pool: &PgPool) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.*
            FROM users u
            JOIN auth_tokens t ON t.user_id = u.id
            WHERE t.key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Random 40-character hex key
pub fn generate_token_key() -> String {
    let mut hasher = Sha256::new();
    hasher.update(Uuid::new_v4().as_bytes());
    hasher.update(Uuid::new_v4().as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..TOKEN_KEY_LEN].to_string()
}
