//! Keyword-based job link extraction from the careers page markup.
//!
//! Every `<a href>` in the document is considered. A link is kept when one
//! of the configured keywords appears in its href or visible text; no other
//! structure of the page is relied upon.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::ExtractConfig;
use crate::models::{JobPosting, NO_DATE};

/// Extract job postings from an HTML document, in document order.
pub fn extract(html: &str, config: &ExtractConfig) -> Vec<JobPosting> {
    let document = Html::parse_document(html);
    let link_selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    let postings: Vec<JobPosting> = document
        .select(&link_selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?.trim();
            let title = visible_text(&anchor);

            // Skip if missing required fields
            if href.is_empty() || title.is_empty() {
                return None;
            }

            if !is_job_link(href, &title, &config.keywords) {
                return None;
            }

            let link = normalize_link(href, &config.link_base);
            let publish_date = guess_publish_date(&title);

            Some(JobPosting::new(
                title,
                config.location.clone(),
                publish_date,
                link,
            ))
        })
        .collect();

    debug!(count = postings.len(), "Extracted job links");
    postings
}

/// True if any keyword occurs, case-insensitively, in the href or the text.
///
/// Keywords are expected in lowercase.
pub fn is_job_link<S: AsRef<str>>(href: &str, text: &str, keywords: &[S]) -> bool {
    let href = href.to_lowercase();
    let text = text.to_lowercase();

    keywords.iter().any(|kw| {
        let kw = kw.as_ref();
        href.contains(kw) || text.contains(kw)
    })
}

/// Make an href absolute. Anything not starting with `http` is appended to
/// `link_base` with its leading slashes removed.
pub fn normalize_link(href: &str, link_base: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", link_base, href.trim_start_matches('/'))
    }
}

/// First whitespace-separated token holding both a digit and a `/`.
///
/// This is a heuristic: "3/4" is accepted as readily as "01/11/2025".
pub fn guess_publish_date(title: &str) -> String {
    title
        .split_whitespace()
        .find(|word| word.contains('/') && word.chars().any(|c| c.is_ascii_digit()))
        .unwrap_or(NO_DATE)
        .to_string()
}

/// Text nodes under the element, each trimmed and concatenated with no separator.
fn visible_text(element: &ElementRef) -> String {
    element.text().map(str::trim).collect()
}
