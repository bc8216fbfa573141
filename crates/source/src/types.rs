use std::fmt;
use std::ops::Deref;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Text as it came out of a source, before any normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RawText(String);

impl RawText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for RawText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RawText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the text for one run comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Source {
    /// A local `.txt` or `.md` file.
    File(PathBuf),
    /// The summary section of a Wikipedia page.
    Wikipedia(String),
    /// Literal text given on the command line.
    Text(String),
}

impl Source {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Source::File(_) => "file",
            Source::Wikipedia(_) => "wikipedia",
            Source::Text(_) => "string",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_text_derefs_to_str() {
        let raw = RawText::new("data1 data2");
        assert_eq!(raw.len(), 11);
        assert!(raw.starts_with("data1"));
    }

    #[test]
    fn source_serializes_with_kind_tag() {
        let json = serde_json::to_string(&Source::Wikipedia("Rust".into())).expect("serialize");
        assert_eq!(json, r#"{"kind":"wikipedia","value":"Rust"}"#);
    }

    #[test]
    fn source_kind_labels() {
        assert_eq!(Source::File("a.txt".into()).kind(), "file");
        assert_eq!(Source::Text("a".into()).kind(), "string");
    }
}
