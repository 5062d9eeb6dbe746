//! Jobs domain - job postings imported from scraper snapshots
//!
//! Responsibilities:
//! - Parsing CSV/JSON snapshot files written by the scraper
//! - Get-or-create import keyed by (title, link, posted_date)
//! - Read access for the API, newest posting first

pub mod import;
pub mod models;
pub mod snapshot;

pub use import::{import_records, load_json, sync_csv, ImportSummary};
pub use models::{Job, NewJob};
pub use snapshot::{parse_posted_date, SnapshotRecord};
