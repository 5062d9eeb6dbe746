use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, ScrapeError};
use crate::models::JobPosting;

pub const CSV_FILE_NAME: &str = "ibps_jobs.csv";
pub const JSON_FILE_NAME: &str = "ibps_jobs.json";

/// Locations of the snapshot pair written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

impl SnapshotPaths {
    pub fn in_dir(output_dir: &Path) -> Self {
        Self {
            csv: output_dir.join(CSV_FILE_NAME),
            json: output_dir.join(JSON_FILE_NAME),
        }
    }
}

/// Write the CSV and JSON snapshots. Nothing is written for an empty set.
pub fn persist(postings: &[JobPosting], output_dir: &Path) -> Result<Option<SnapshotPaths>> {
    if postings.is_empty() {
        return Ok(None);
    }

    std::fs::create_dir_all(output_dir).map_err(|e| ScrapeError::io(output_dir, e))?;

    let paths = SnapshotPaths::in_dir(output_dir);
    save_to_csv(postings, &paths.csv)?;
    save_to_json(postings, &paths.json)?;
    Ok(Some(paths))
}

pub fn save_to_csv(postings: &[JobPosting], file_path: &Path) -> Result<()> {
    let file = File::create(file_path).map_err(|e| ScrapeError::io(file_path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    for posting in postings {
        writer.serialize(posting)?;
    }

    writer.flush().map_err(|e| ScrapeError::io(file_path, e))?;
    Ok(())
}

pub fn save_to_json(postings: &[JobPosting], file_path: &Path) -> Result<()> {
    let file = File::create(file_path).map_err(|e| ScrapeError::io(file_path, e))?;
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    postings.serialize(&mut serializer)?;

    writer.flush().map_err(|e| ScrapeError::io(file_path, e))
}
