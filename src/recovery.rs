//! Best-effort external remedy lookup
//!
//! When event processing fails, the logger asks a [`RemedySource`] for a
//! candidate fix. The HTTP implementation tokenizes the error message,
//! issues one timeout-bounded search request, and scrapes the first result
//! fragment. Scraping an uncontrolled page by a guessed markup class is
//! inherently fragile, so every non-transport failure degrades to the
//! [`NO_SOLUTION`] sentinel instead of raising.

use crate::error::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;
use tracing::{error, info};

/// Sentinel returned when no remedy could be found.
pub const NO_SOLUTION: &str = "no solution found";

/// Markup class of the search result snippet to scrape.
const RESULT_MARKER: &str = "BNeawe iBp4i AP7Wnd";

/// Alphabetic token runs; everything else in the error text is discarded.
static ALPHA_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").unwrap());

/// A collaborator that can propose a remedy for a failure.
#[async_trait]
pub trait RemedySource: Send + Sync {
    /// Attempt to find a remedy for the given error message.
    ///
    /// Returns [`NO_SOLUTION`] when the lookup succeeds but yields nothing.
    /// A transport-level failure is re-raised to the caller.
    async fn suggest_remedy(&self, error_text: &str) -> Result<String>;
}

/// Remedy source backed by an HTTP search endpoint.
pub struct HttpRemedySource {
    client: reqwest::Client,
    search_url: String,
}

impl HttpRemedySource {
    /// Create a source querying `search_url`, bounding every request by
    /// `timeout`.
    pub fn new(search_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            search_url: search_url.into(),
        }
    }
}

#[async_trait]
impl RemedySource for HttpRemedySource {
    async fn suggest_remedy(&self, error_text: &str) -> Result<String> {
        let query = extract_keywords(error_text).join(" ");
        if query.is_empty() {
            return Ok(NO_SOLUTION.to_string());
        }

        info!(query = %query, "Searching for a remedy");

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", query.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request error during remedy lookup");
                e
            })?;

        let response = response.error_for_status().map_err(|e| {
            error!(error = %e, "Remedy lookup returned an error status");
            e
        })?;

        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read remedy lookup body");
            e
        })?;

        Ok(extract_fragment(&body).unwrap_or_else(|| NO_SOLUTION.to_string()))
    }
}

/// Keep only alphabetic tokens from an error message.
pub fn extract_keywords(text: &str) -> Vec<String> {
    ALPHA_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Pull the text of the first result fragment carrying the marker class.
///
/// Lexical scan only; a full HTML parser buys nothing against markup we do
/// not control.
fn extract_fragment(html: &str) -> Option<String> {
    let marker = format!("class=\"{}\"", RESULT_MARKER);
    let at = html.find(&marker)?;
    let rest = &html[at + marker.len()..];
    let open = rest.find('>')?;
    let rest = &rest[open + 1..];
    let close = rest.find('<')?;

    let text = rest[..close].trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
