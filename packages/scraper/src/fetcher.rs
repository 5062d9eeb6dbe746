//! Careers page fetcher.
//!
//! Fetches with certificate verification first. When that fails on the
//! certificate itself, one more attempt is made with verification turned
//! off. Every other transport failure is returned to the caller.

use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::activity_log::ActivityLog;
use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};

/// Substrings that identify a certificate/TLS failure somewhere in an error chain.
const TLS_FAILURE_MARKERS: [&str; 4] = ["certificate", "ssl", "tls", "self signed"];

/// Result of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Status was exactly 200
    Page(String),
    /// Any other final status
    Status(u16),
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, log: &ActivityLog) -> Result<FetchOutcome>;
}

/// reqwest-backed fetcher holding a verifying and a non-verifying client.
pub struct HttpFetcher {
    client: reqwest::Client,
    insecure_client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let build = |accept_invalid_certs: bool| {
            reqwest::Client::builder()
                .timeout(config.timeout)
                .user_agent(config.user_agent.as_str())
                .danger_accept_invalid_certs(accept_invalid_certs)
                .build()
                .map_err(ScrapeError::Client)
        };

        Ok(Self {
            client: build(false)?,
            insecure_client: build(true)?,
        })
    }

    async fn get(
        client: &reqwest::Client,
        url: &str,
    ) -> std::result::Result<FetchOutcome, reqwest::Error> {
        let response = client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(FetchOutcome::Status(status.as_u16()));
        }

        Ok(FetchOutcome::Page(response.text().await?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, log: &ActivityLog) -> Result<FetchOutcome> {
        debug!(url = %url, "HTTP fetch starting");

        let outcome = match Self::get(&self.client, url).await {
            Ok(outcome) => outcome,
            Err(e) if is_tls_failure(&e) => {
                log.warn("SSL verification failed, retrying without SSL verification...")?;
                Self::get(&self.insecure_client, url)
                    .await
                    .map_err(|source| ScrapeError::Http {
                        url: url.to_string(),
                        source,
                    })?
            }
            Err(source) => {
                return Err(ScrapeError::Http {
                    url: url.to_string(),
                    source,
                })
            }
        };

        if let FetchOutcome::Status(status) = &outcome {
            debug!(url = %url, status = *status, "Non-200 response");
        }
        Ok(outcome)
    }
}

/// Walk the source chain looking for a certificate or TLS handshake failure.
///
/// The outer error's own message is skipped: reqwest puts the request URL
/// there, and a URL may contain any of the markers.
pub fn is_tls_failure(err: &(dyn StdError + 'static)) -> bool {
    let mut current = err.source();
    while let Some(e) = current {
        let message = e.to_string().to_lowercase();
        if TLS_FAILURE_MARKERS.iter().any(|m| message.contains(m)) {
            return true;
        }
        current = e.source();
    }
    false
}
