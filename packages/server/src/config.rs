use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Default snapshot locations, relative to the API's working directory.
pub const DEFAULT_SNAPSHOT_CSV_PATH: &str = "../scraper/outputs/ibps_jobs.csv";
pub const DEFAULT_SNAPSHOT_JSON_PATH: &str = "../scraper/outputs/ibps_jobs.json";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
    pub snapshot_csv_path: PathBuf,
    pub snapshot_json_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            snapshot_csv_path: env::var("SNAPSHOT_CSV_PATH")
                .unwrap_or_else(|_| DEFAULT_SNAPSHOT_CSV_PATH.to_string())
                .into(),
            snapshot_json_path: env::var("SNAPSHOT_JSON_PATH")
                .unwrap_or_else(|_| DEFAULT_SNAPSHOT_JSON_PATH.to_string())
                .into(),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
