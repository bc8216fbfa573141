//! Error types produced by the source adapters.
//!
//! | Error | Raised by | Meaning |
//! |-------|-----------|---------|
//! | [`NotFound`](SourceError::NotFound) | file adapter | no regular file at the path |
//! | [`UnsupportedType`](SourceError::UnsupportedType) | file adapter | extension not accepted |
//! | [`Read`](SourceError::Read) | file adapter | file exists but could not be read |
//! | [`EmptyInput`](SourceError::EmptyInput) | string adapter | zero-length text |
//!
//! Summary lookups never surface a [`SourceError`]. Their failures are
//! described by [`SummaryError`] and turned into a placeholder text by
//! [`fetch_summary`](crate::fetch_summary).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors while obtaining raw text from a local source.
///
/// ```rust
/// use source::SourceError;
///
/// let err = SourceError::EmptyInput;
/// assert_eq!(err.to_string(), "the provided string is empty");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("there is no file at path: {}", path.display())]
    NotFound { path: PathBuf },

    #[error(
        "file {} has to be one of the following types: {}",
        path.display(),
        accepted.join(", ")
    )]
    UnsupportedType {
        path: PathBuf,
        accepted: Vec<String>,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the provided string is empty")]
    EmptyInput,
}

impl SourceError {
    /// The path the error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            SourceError::NotFound { path }
            | SourceError::UnsupportedType { path, .. }
            | SourceError::Read { path, .. } => Some(path),
            SourceError::EmptyInput => None,
        }
    }
}

/// Why a summary lookup produced no text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("topic `{0}` is ambiguous")]
    Ambiguous(String),
    #[error("no page found for topic `{0}`")]
    NotFound(String),
    #[error("page for topic `{0}` has no summary text")]
    EmptyExtract(String),
    #[error("request failed: {0}")]
    Http(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SummaryError {
    fn from(err: reqwest::Error) -> Self {
        SummaryError::Http(err.to_string())
    }
}
