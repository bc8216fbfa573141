//! Output types of the normalization pipeline.
//!
//! [`NormalizedText`] is the separator-joined passage, [`OutputReport`]
//! pairs it with optional [`TextStats`] and renders the final text handed
//! to the caller.
//!
//! # Examples
//!
//! ```rust
//! use normalize::{process, PrepareOptions};
//!
//! let report = process("hello world", &PrepareOptions::default());
//!
//! assert_eq!(report.text.as_str(), "hello|world");
//! assert_eq!(report.stats.map(|s| s.word_count), Some(2));
//! assert_eq!(
//!     report.render(),
//!     "hello|world\n\nChar count: 11\nWord count: 2\nWPM required for 10 mins: 1"
//! );
//! ```

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::stats::TextStats;

/// Text that has been through [`normalize`](crate::normalize).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized text plus the statistics computed over it, if requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputReport {
    pub text: NormalizedText,
    pub stats: Option<TextStats>,
}

impl OutputReport {
    pub fn new(text: NormalizedText, stats: Option<TextStats>) -> Self {
        Self { text, stats }
    }

    /// The text and the rendered statistics separated by a blank line, or
    /// the text alone when no statistics were computed.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OutputReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.stats {
            Some(stats) => write!(f, "{}\n\n{}", self.text, stats),
            None => write!(f, "{}", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_stats;

    #[test]
    fn report_without_stats_is_text_only() {
        let report = OutputReport::new(NormalizedText::new("a|b".into()), None);
        assert_eq!(report.render(), "a|b");
    }

    #[test]
    fn report_with_stats_has_blank_line() {
        let text = NormalizedText::new("a|b".into());
        let stats = compute_stats(text.as_str());
        let report = OutputReport::new(text, Some(stats));
        assert_eq!(
            report.render(),
            "a|b\n\nChar count: 3\nWord count: 2\nWPM required for 10 mins: 1"
        );
    }

    #[test]
    fn normalized_text_serializes_as_plain_string() {
        let text = NormalizedText::new("x|y".into());
        let json = serde_json::to_string(&text).expect("serialize");
        assert_eq!(json, "\"x|y\"");
    }
}
