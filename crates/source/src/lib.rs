//! typeprep source layer.
//!
//! Every run reads its text from exactly one place: a local file, a
//! literal string or a Wikipedia summary. This crate holds one adapter per
//! place, each returning [`RawText`] for the normalizer.
//!
//! ## What we do
//!
//! - **Files** - only accepted extensions (`txt`, `md` by default), lines
//!   right-trimmed and joined with spaces, read errors fail fast
//! - **Strings** - rejected when empty, otherwise passed through
//! - **Wikipedia** - one blocking REST lookup; failures become a
//!   placeholder message instead of an error
//! - **Log everything** - structured events via tracing, one span per lookup
//!
//! ## Example
//!
//! ```
//! use source::{read_string, SourceError};
//!
//! let raw = read_string("Some text").unwrap();
//! assert_eq!(raw.as_str(), "Some text");
//!
//! assert!(matches!(read_string(""), Err(SourceError::EmptyInput)));
//! ```

mod config;
mod error;
mod file;
mod text;
mod types;
mod wikipedia;

pub use crate::config::{ConfigError, SourceConfig, WikipediaConfig, DEFAULT_TIMEOUT_SECS};
pub use crate::error::{SourceError, SummaryError};
pub use crate::file::{join_lines, read_file};
pub use crate::text::read_string;
pub use crate::types::{RawText, Source};
pub use crate::wikipedia::{
    fetch_summary, placeholder_message, SummaryOutcome, SummaryProvider, WikipediaClient,
};
