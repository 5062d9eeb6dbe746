//! Test fixtures for creating test data.
//!
//! Names carry a random suffix so tests can share one database.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use api_core::domains::auth::User;
use sqlx::PgPool;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "correct horse battery staple";

pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Create an API user with `TEST_PASSWORD`
pub async fn create_test_user(pool: &PgPool) -> Result<User> {
    User::create(&unique("user"), TEST_PASSWORD, pool).await
}

/// Write a CSV snapshot with the scraper's header
pub fn write_csv_snapshot(dir: &Path, rows: &[(&str, &str, &str)]) -> Result<PathBuf> {
    let path = dir.join("ibps_jobs.csv");
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["Job Title", "Location", "Publish Date", "Link"])?;
    for (title, date, link) in rows {
        writer.write_record([*title, "All India", *date, *link])?;
    }
    writer.flush()?;
    Ok(path)
}

/// Write a JSON snapshot in the scraper's layout
pub fn write_json_snapshot(dir: &Path, rows: &[(&str, &str, &str)]) -> Result<PathBuf> {
    let path = dir.join("ibps_jobs.json");
    let records: Vec<_> = rows
        .iter()
        .map(|(title, date, link)| {
            serde_json::json!({
                "Job Title": title,
                "Location": "All India",
                "Publish Date": date,
                "Link": link,
            })
        })
        .collect();
    std::fs::write(&path, serde_json::to_string_pretty(&records)?)?;
    Ok(path)
}
