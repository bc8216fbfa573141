//! Wikipedia summary lookups.
//!
//! [`SummaryProvider`] is the seam between the adapter and the network.
//! [`WikipediaClient`] is the production implementation: one blocking GET
//! against the REST `page/summary` endpoint of the configured language
//! edition. [`fetch_summary`] never fails; anything that goes wrong becomes
//! a [`SummaryOutcome::Placeholder`] naming the topic.
//!
//! ```rust
//! use source::{fetch_summary, SummaryError, SummaryOutcome, SummaryProvider};
//!
//! struct Offline;
//!
//! impl SummaryProvider for Offline {
//!     fn summary(&self, topic: &str) -> Result<String, SummaryError> {
//!         Err(SummaryError::Http(format!("offline, cannot look up {topic}")))
//!     }
//! }
//!
//! let outcome = fetch_summary("Rust", &Offline);
//! assert_eq!(
//!     outcome,
//!     SummaryOutcome::Placeholder("Wikipedia did not return a summary for Rust".into())
//! );
//! ```

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, info, warn, Level};

use crate::config::WikipediaConfig;
use crate::error::SummaryError;
use crate::types::RawText;

/// Anything that can turn a topic into summary text.
pub trait SummaryProvider {
    fn summary(&self, topic: &str) -> Result<String, SummaryError>;
}

/// Result of a summary lookup. Only [`Found`](SummaryOutcome::Found) text
/// should be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Found(RawText),
    Placeholder(String),
}

impl SummaryOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SummaryOutcome::Found(_))
    }
}

/// Message returned in place of a summary when the lookup fails.
pub fn placeholder_message(topic: &str) -> String {
    format!("Wikipedia did not return a summary for {topic}")
}

/// Looks up `topic` and converts every failure into a placeholder.
pub fn fetch_summary(topic: &str, provider: &dyn SummaryProvider) -> SummaryOutcome {
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "source.fetch_summary", topic = %topic);
    let _guard = span.enter();

    match provider.summary(topic) {
        Ok(text) => {
            info!(
                bytes = text.len(),
                elapsed_micros = start.elapsed().as_micros(),
                "summary_success"
            );
            SummaryOutcome::Found(RawText::new(text))
        }
        Err(err) => {
            warn!(
                error = %err,
                elapsed_micros = start.elapsed().as_micros(),
                "summary_failure"
            );
            SummaryOutcome::Placeholder(placeholder_message(topic))
        }
    }
}

/// The subset of the REST summary payload we read.
#[derive(Debug, Deserialize)]
struct SummaryPayload {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    extract: String,
}

/// Blocking client for `https://{lang}.wikipedia.org/api/rest_v1/page/summary/{title}`.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    config: WikipediaConfig,
}

impl WikipediaClient {
    pub fn new(config: WikipediaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WikipediaConfig {
        &self.config
    }

    /// Summary URL for `topic`. Spaces become underscores, the title is
    /// percent-encoded as a single path segment.
    pub fn summary_url(&self, topic: &str) -> Result<Url, SummaryError> {
        let mut url = self
            .config
            .base_url()
            .map_err(|err| SummaryError::Http(err.to_string()))?;
        let title = topic.trim().replace(' ', "_");
        url.path_segments_mut()
            .map_err(|_| SummaryError::Http("summary endpoint cannot take a path".into()))?
            .pop_if_empty()
            .extend(["page", "summary", title.as_str()]);
        Ok(url)
    }
}

impl SummaryProvider for WikipediaClient {
    fn summary(&self, topic: &str) -> Result<String, SummaryError> {
        let url = self.summary_url(topic)?;
        debug!(url = %url, "summary_request");

        // One lookup per run, so the client lives only for this call.
        let client = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .user_agent(self.config.user_agent.as_str())
            .build()?;
        let response = client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;
        interpret_response(topic, status, &body)
    }
}

/// Maps a REST summary response onto summary text or a [`SummaryError`].
fn interpret_response(topic: &str, status: StatusCode, body: &str) -> Result<String, SummaryError> {
    if status == StatusCode::NOT_FOUND {
        return Err(SummaryError::NotFound(topic.to_string()));
    }
    if !status.is_success() {
        return Err(SummaryError::Http(format!("status {status} for topic `{topic}`")));
    }

    let payload: SummaryPayload =
        serde_json::from_str(body).map_err(|err| SummaryError::Decode(err.to_string()))?;
    if payload.kind == "disambiguation" {
        return Err(SummaryError::Ambiguous(topic.to_string()));
    }
    if payload.extract.trim().is_empty() {
        return Err(SummaryError::EmptyExtract(topic.to_string()));
    }
    Ok(payload.extract)
}
