use std::sync::Arc;

use tokio::sync::Mutex;

use crate::activity_log::ActivityLog;
use crate::config::ScraperConfig;
use crate::dedupe::dedupe;
use crate::error::Result;
use crate::extractor::extract;
use crate::fetcher::{FetchOutcome, HttpFetcher, PageFetcher};
use crate::models::JobPosting;
use crate::writer::{persist, SnapshotPaths};

/// What a single pipeline run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub postings: Vec<JobPosting>,
    /// `None` when nothing was written (failed fetch or zero postings)
    pub snapshot: Option<SnapshotPaths>,
    /// Set when another run held the pipeline and this one did nothing
    pub skipped: bool,
}

/// fetch → extract → dedupe → persist, one run at a time.
pub struct ScrapePipeline {
    config: ScraperConfig,
    fetcher: Arc<dyn PageFetcher>,
    log: ActivityLog,
    running: Mutex<()>,
}

impl ScrapePipeline {
    /// Pipeline backed by the real HTTP fetcher.
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let fetcher = Arc::new(HttpFetcher::new(&config)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: ScraperConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        let log = ActivityLog::in_dir(&config.output_dir);
        Self {
            config,
            fetcher,
            log,
            running: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Run the whole pipeline and return once the snapshot is on disk.
    ///
    /// A non-200 response is not an error: it is logged and yields an empty
    /// report with no files written.
    pub async fn run_once(&self) -> Result<RunReport> {
        let Ok(_guard) = self.running.try_lock() else {
            self.log
                .warn("A scrape run is already in progress, skipping this trigger.")?;
            return Ok(RunReport {
                skipped: true,
                ..RunReport::default()
            });
        };

        self.log.info("Fetching IBPS Career page...")?;

        let html = match self.fetcher.fetch(&self.config.base_url, &self.log).await? {
            FetchOutcome::Page(html) => html,
            FetchOutcome::Status(status) => {
                self.log
                    .error(format!("Failed to load page (Status Code: {})", status))?;
                return Ok(RunReport::default());
            }
        };

        let postings = dedupe(extract(&html, &self.config.extract));
        self.log
            .info(format!("Found {} job postings.", postings.len()))?;

        let snapshot = persist(&postings, &self.config.output_dir)?;
        match &snapshot {
            Some(paths) => {
                self.log
                    .info(format!("Saved results to: {}", paths.csv.display()))?;
                self.log
                    .info(format!("Saved results to: {}", paths.json.display()))?;
            }
            None => {
                self.log
                    .warn("No job listings found, check IBPS site structure.")?;
            }
        }

        Ok(RunReport {
            postings,
            snapshot,
            skipped: false,
        })
    }
}
