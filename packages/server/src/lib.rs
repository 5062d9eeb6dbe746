// IBPS Jobs API - Core
//
// Imports scraper snapshots into Postgres and serves them over a
// token-authenticated JSON API.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
