//! Snapshot import (get-or-create).
//!
//! The jobs table only grows: rows already present are left untouched even
//! when the snapshot's values changed, and rows missing from a snapshot are
//! kept.

use std::path::Path;

use anyhow::Result;
use sqlx::PgPool;
use tracing::{debug, error, info};

use super::models::Job;
use super::snapshot::{read_csv, read_json, SnapshotRecord};

/// Counts from one import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows inserted by this import
    pub added: usize,
    /// Records that matched an existing row
    pub existing: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.added + self.existing
    }
}

/// Get-or-create each record by (title, link, posted_date)
pub async fn import_records(records: &[SnapshotRecord], pool: &PgPool) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for record in records {
        let (job, created) = Job::get_or_create(&record.to_new_job(), pool).await?;
        if created {
            debug!(job_id = %job.id, title = %job.title, "Imported job");
            summary.added += 1;
        } else {
            summary.existing += 1;
        }
    }

    Ok(summary)
}

/// Import the CSV snapshot. A missing file is logged and yields `Ok(None)`.
pub async fn sync_csv(path: &Path, pool: &PgPool) -> Result<Option<ImportSummary>> {
    if !path.exists() {
        error!("CSV file not found at {}", path.display());
        return Ok(None);
    }

    let records = read_csv(path)?;
    let summary = import_records(&records, pool).await?;
    info!(
        added = summary.added,
        existing = summary.existing,
        "Synced CSV snapshot {}",
        path.display()
    );
    Ok(Some(summary))
}

/// Import the JSON snapshot. A missing file is logged and yields `Ok(None)`.
pub async fn load_json(path: &Path, pool: &PgPool) -> Result<Option<ImportSummary>> {
    if !path.exists() {
        error!("JSON file not found at {}", path.display());
        return Ok(None);
    }

    let records = read_json(path)?;
    let summary = import_records(&records, pool).await?;
    info!(
        added = summary.added,
        existing = summary.existing,
        "Loaded JSON snapshot {}",
        path.display()
    );
    Ok(Some(summary))
}
