use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::auth::password::{hash_password, verify_password};

/// API user. Only the Argon2 hash of the password is stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl User {
    pub async fn find_by_username(username: &str, pool: &PgPool) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Create a user, hashing the password
    pub async fn create(username: &str, password: &str, pool: &PgPool) -> Result<Self> {
        let password_hash = hash_password(password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .with_context(|| format!("Failed to create user {}", username))?;
        Ok(user)
    }

    /// Return the user if the username exists and the password matches
    pub async fn authenticate(
        username: &str,
        password: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        if username.is_empty() || password.is_empty() {
            return Ok(None);
        }

        let user = Self::find_by_username(username, pool).await?;
        Ok(user.filter(|u| verify_password(password, &u.password_hash)))
    }
}
