//! Reading the scraper's CSV/JSON snapshot files.
//!
//! Both files use the column/key names `Job Title`, `Location`,
//! `Publish Date` and `Link`. A missing title reads as "N/A" and a missing
//! link as "".

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use super::models::NewJob;

fn default_title() -> String {
    "N/A".to_string()
}

/// One row of a snapshot file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnapshotRecord {
    #[serde(rename = "Job Title", default = "default_title")]
    pub title: String,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Publish Date", default)]
    pub publish_date: Option<String>,
    #[serde(rename = "Link", default)]
    pub link: String,
}

impl SnapshotRecord {
    pub fn to_new_job(&self) -> NewJob {
        NewJob {
            title: self.title.clone(),
            link: self.link.clone(),
            posted_date: self.publish_date.as_deref().and_then(parse_posted_date),
        }
    }
}

pub fn read_csv(path: &Path) -> Result<Vec<SnapshotRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV snapshot {}", path.display()))?;

    reader
        .deserialize()
        .collect::<std::result::Result<Vec<SnapshotRecord>, _>>()
        .with_context(|| format!("Failed to parse CSV snapshot {}", path.display()))
}

pub fn read_json(path: &Path) -> Result<Vec<SnapshotRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open JSON snapshot {}", path.display()))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON snapshot {}", path.display()))
}

/// Parse the scraper's date guess as day/month/year.
///
/// Accepts `dd/mm/yyyy` and `dd/mm/yy` (read as 20yy), ignoring punctuation
/// around the token. Anything else, including "N/A" and fractions like
/// "3/4", yields `None`.
pub fn parse_posted_date(raw: &str) -> Option<NaiveDate> {
    let token = raw.trim_matches(|c: char| !c.is_ascii_alphanumeric());

    let parts: Vec<&str> = token.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };

    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = match year.len() {
        4 => year.parse().ok()?,
        2 => 2000 + year.parse::<i32>().ok()?,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}
