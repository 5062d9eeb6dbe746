use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

pub const DEFAULT_BASE_URL: &str = "https://www.ibps.in/career/";
pub const DEFAULT_LINK_BASE: &str = "https://www.ibps.in/";
pub const DEFAULT_LOCATION: &str = "All India";
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Every Monday at 09:00 (sec min hour day-of-month month day-of-week)
pub const DEFAULT_SCHEDULE: &str = "0 0 9 * * MON";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

pub const DEFAULT_KEYWORDS: [&str; 6] = [
    "pdf",
    "crp",
    "recruitment",
    "advertisement",
    "notification",
    "important notice",
];

/// Settings for link classification and normalization.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Lowercase keywords matched against href and link text
    pub keywords: Vec<String>,
    /// Prefix for hrefs that do not start with `http`
    pub link_base: String,
    pub location: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            link_base: DEFAULT_LINK_BASE.to_string(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl ExtractConfig {
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn with_link_base(mut self, link_base: impl Into<String>) -> Self {
        self.link_base = link_base.into();
        self
    }
}

/// Scraper configuration, resolved once at startup and passed into the pipeline.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Careers page to fetch
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Directory for the CSV/JSON snapshot and the activity log
    pub output_dir: PathBuf,
    /// Cron expression for the weekly mode (local time)
    pub schedule: String,
    pub extract: ExtractConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            schedule: DEFAULT_SCHEDULE.to_string(),
            extract: ExtractConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        let timeout_secs = match env::var("SCRAPER_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("SCRAPER_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let extract = match env::var("SCRAPER_LINK_BASE") {
            Ok(link_base) => defaults.extract.clone().with_link_base(link_base),
            Err(_) => defaults.extract.clone(),
        };

        Ok(Self {
            base_url: env::var("SCRAPER_BASE_URL").unwrap_or(defaults.base_url),
            user_agent: defaults.user_agent,
            timeout: Duration::from_secs(timeout_secs),
            output_dir: env::var("SCRAPER_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            schedule: env::var("SCRAPER_SCHEDULE").unwrap_or(defaults.schedule),
            extract,
        })
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}
