use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Job posting imported from a scraper snapshot
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub link: String,
    pub posted_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Values that make up a job's import identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub link: String,
    pub posted_date: Option<NaiveDate>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Job {
    /// All jobs, most recent posted_date first (NULL dates sort first, Postgres default)
    pub async fn find_all_newest_first(pool: &PgPool) -> Result<Vec<Self>> {
        let jobs = sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs ORDER BY posted_date DESC, created_at DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(jobs)
    }

    /// Find the job matching the import identity. NULL dates match NULL dates.
    pub async fn find_by_identity(new_job: &NewJob, pool: &PgPool) -> Result<Option<Self>> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            SELECT * FROM jobs
            WHERE title = $1
              AND link = $2
              AND posted_date IS NOT DISTINCT FROM $3
            "#,
        )
        .bind(&new_job.title)
        .bind(&new_job.link)
        .bind(new_job.posted_date)
        .fetch_optional(pool)
        .await?;
        Ok(job)
    }

    /// Insert unless a row with the same identity exists. Existing rows are
    /// never modified.
    ///
    /// The bool is true when a row was inserted.
    pub async fn get_or_create(new_job: &NewJob, pool: &PgPool) -> Result<(Self, bool)> {
        let inserted = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (id, title, link, posted_date)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (title, link, (COALESCE(posted_date, DATE '0001-01-01'))) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&new_job.title)
        .bind(&new_job.link)
        .bind(new_job.posted_date)
        .fetch_optional(pool)
        .await?;

        if let Some(job) = inserted {
            return Ok((job, true));
        }

        let existing = Self::find_by_identity(new_job, pool)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Conflicting job vanished: {}", new_job.title))?;
        Ok((existing, false))
    }
}
