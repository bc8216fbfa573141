//! Workspace umbrella crate for typeprep.
//!
//! This crate stitches the source adapters and the normalizer together so
//! callers get pasteable practice text from a single call per source.
//!
//! ```
//! use typeprep::{text_from_string, PrepareOptions};
//!
//! let out = text_from_string("Hello typing world", &PrepareOptions::default()).unwrap();
//! assert_eq!(
//!     out,
//!     "Hello|typing|world\n\nChar count: 18\nWord count: 3\nWPM required for 10 mins: 1"
//! );
//! ```

pub mod cli;
pub mod config;

pub use normalize::{
    compute_stats, normalize, process, required_wpm, NormalizedText, OutputReport,
    PrepareOptions, TextStats, SEPARATOR,
};
pub use source::{
    fetch_summary, placeholder_message, read_file, read_string, ConfigError, RawText, Source,
    SourceConfig, SourceError, SummaryError, SummaryOutcome, SummaryProvider, WikipediaClient,
    WikipediaConfig,
};

pub use crate::config::RunConfig;

use std::error::Error;
use std::fmt;
use std::path::Path;

use tracing::{info, Level};

/// Errors that can stop a run before any text is produced.
#[derive(Debug)]
pub enum PrepareError {
    Source(SourceError),
    Config(ConfigError),
}

impl fmt::Display for PrepareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepareError::Source(err) => write!(f, "{err}"),
            PrepareError::Config(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl Error for PrepareError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PrepareError::Source(err) => Some(err),
            PrepareError::Config(err) => Some(err),
        }
    }
}

impl From<SourceError> for PrepareError {
    fn from(value: SourceError) -> Self {
        PrepareError::Source(value)
    }
}

impl From<ConfigError> for PrepareError {
    fn from(value: ConfigError) -> Self {
        PrepareError::Config(value)
    }
}

/// Practice text from a `.txt`/`.md` file.
pub fn text_from_file(
    path: impl AsRef<Path>,
    cfg: &SourceConfig,
    opts: &PrepareOptions,
) -> Result<String, PrepareError> {
    let raw = read_file(path, cfg)?;
    Ok(finish(raw, opts))
}

/// Practice text from a Wikipedia summary.
///
/// Never fails: when the lookup does not produce a summary the placeholder
/// message is returned as-is, without normalization or statistics.
pub fn text_from_wikipedia(
    topic: &str,
    provider: &dyn SummaryProvider,
    opts: &PrepareOptions,
) -> String {
    match fetch_summary(topic, provider) {
        SummaryOutcome::Found(raw) => finish(raw, opts),
        SummaryOutcome::Placeholder(message) => message,
    }
}

/// Practice text from a literal string.
pub fn text_from_string(text: &str, opts: &PrepareOptions) -> Result<String, PrepareError> {
    let raw = read_string(text)?;
    Ok(finish(raw, opts))
}

/// Validates `cfg` and dispatches to the adapter matching `source`.
pub fn prepare(
    source: &Source,
    cfg: &SourceConfig,
    provider: &dyn SummaryProvider,
    opts: &PrepareOptions,
) -> Result<String, PrepareError> {
    cfg.validate()?;

    let span = tracing::span!(Level::INFO, "typeprep.prepare", source = source.kind());
    let _guard = span.enter();

    let out = match source {
        Source::File(path) => text_from_file(path, cfg, opts)?,
        Source::Wikipedia(topic) => text_from_wikipedia(topic, provider, opts),
        Source::Text(text) => text_from_string(text, opts)?,
    };
    info!(
        processed = opts.processed,
        stats = opts.stats,
        output_len = out.len(),
        "prepare_success"
    );
    Ok(out)
}

/// Raw text when `processed` is off, otherwise the rendered report.
fn finish(raw: RawText, opts: &PrepareOptions) -> String {
    if !opts.processed {
        return raw.into_string();
    }
    process(&raw, opts).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprocessed_text_ignores_stats_flag() {
        let opts = PrepareOptions {
            processed: false,
            stats: true,
        };
        assert_eq!(
            text_from_string("raw  text\n", &opts).expect("non-empty"),
            "raw  text\n"
        );
    }

    #[test]
    fn prepare_error_display_and_source() {
        let err = PrepareError::from(SourceError::EmptyInput);
        assert_eq!(err.to_string(), "the provided string is empty");
        assert!(err.source().is_some());

        let err = PrepareError::from(ConfigError::ZeroTimeout);
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
