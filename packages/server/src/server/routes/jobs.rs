use axum::{extract::Extension, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::ApiError;
use crate::domains::jobs::Job;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// Job as exposed over the API
#[derive(Debug, Serialize, Deserialize)]
pub struct JobResponse {
    pub title: String,
    pub link: String,
    pub posted_date: Option<NaiveDate>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            title: job.title,
            link: job.link,
            posted_date: job.posted_date,
        }
    }
}

/// GET /jobs/
pub async fn list_jobs_handler(
    Extension(state): Extension<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<JobResponse>>, ApiError> {
    let jobs = Job::find_all_newest_first(&state.db_pool).await?;
    debug!(
        user_id = %user.user_id,
        count = jobs.len(),
        "Listing jobs for {}",
        user.username
    );

    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}
