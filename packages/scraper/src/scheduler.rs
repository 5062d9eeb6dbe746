//! Recurring scrape runs using tokio-cron-scheduler.
//!
//! The schedule is owned by a [`WeeklySchedule`] handle: `start` registers
//! the pipeline and returns immediately, `stop` shuts the scheduler down.
//! Blocking until shutdown is the caller's business (see the `weekly`
//! subcommand of the binary).

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::error::Result;
use crate::pipeline::ScrapePipeline;

pub struct WeeklySchedule {
    scheduler: JobScheduler,
    job_id: Uuid,
}

impl WeeklySchedule {
    /// Register the pipeline on `pipeline.config().schedule` (local time) and start ticking.
    pub async fn start(pipeline: Arc<ScrapePipeline>) -> Result<Self> {
        let scheduler = JobScheduler::new().await?;
        let cron = pipeline.config().schedule.clone();

        let job_pipeline = pipeline.clone();
        let scrape_job = Job::new_async_tz(cron.as_str(), Local, move |_uuid, _lock| {
            let pipeline = job_pipeline.clone();
            Box::pin(async move {
                match pipeline.run_once().await {
                    Ok(report) if report.skipped => {}
                    Ok(report) => {
                        tracing::info!(postings = report.postings.len(), "Scheduled scrape finished");
                    }
                    Err(e) => tracing::error!("Scheduled scrape failed: {}", e),
                }
            })
        })?;

        let job_id = scheduler.add(scrape_job).await?;
        scheduler.start().await?;

        pipeline.log().info(format!(
            "Scheduler started, will run on schedule '{}' (local time).",
            cron
        ))?;

        Ok(Self { scheduler, job_id })
    }

    /// Next time the scrape job fires.
    pub async fn next_run(&mut self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.scheduler.next_tick_for_job(self.job_id).await?)
    }

    pub async fn stop(mut self) -> Result<()> {
        self.scheduler.shutdown().await?;
        tracing::info!("Scheduler stopped");
        Ok(())
    }
}
