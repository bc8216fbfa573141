//! Configuration types for the source adapters.
//!
//! [`SourceConfig`] decides which file extensions the file adapter accepts
//! and how the Wikipedia client reaches the summary service. Both structs
//! are cheap to clone and serde-serializable; callers should run
//! [`SourceConfig::validate`] once before use.
//!
//! ```rust
//! use source::SourceConfig;
//!
//! let config = SourceConfig::default();
//! assert_eq!(config.accepted_extensions, vec!["txt", "md"]);
//! assert_eq!(config.wikipedia.language, "en");
//! config.validate().expect("defaults are valid");
//! ```
use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default HTTP timeout for summary lookups, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for all source adapters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// Extensions (without the dot) the file adapter accepts. Compared
    /// case-insensitively.
    pub accepted_extensions: Vec<String>,
    pub wikipedia: WikipediaConfig,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: vec!["txt".into(), "md".into()],
            wikipedia: WikipediaConfig::default(),
        }
    }
}

impl SourceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.accepted_extensions.is_empty() {
            return Err(ConfigError::NoAcceptedExtensions);
        }
        if let Some(ext) = self
            .accepted_extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(ConfigError::InvalidExtension(ext.clone()));
        }
        self.wikipedia.validate()
    }

    /// True when `ext` is one of the accepted extensions, ignoring ASCII case.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.accepted_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(ext))
    }
}

/// How to reach the Wikipedia REST summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WikipediaConfig {
    /// Language edition, e.g. `en` or `de`.
    pub language: String,
    /// Overrides the REST base URL derived from `language`.
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
    /// Sent with every request; Wikimedia asks clients to identify themselves.
    pub user_agent: String,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            language: "en".into(),
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("typeprep/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl WikipediaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let language_ok = !self.language.is_empty()
            && self
                .language
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-');
        if !language_ok {
            return Err(ConfigError::InvalidLanguage(self.language.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        self.base_url()?;
        Ok(())
    }

    /// REST base URL, `https://{language}.wikipedia.org/api/rest_v1` unless overridden.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let raw = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}.wikipedia.org/api/rest_v1", self.language),
        };
        let url = Url::parse(&raw).map_err(|err| ConfigError::InvalidEndpoint {
            endpoint: raw.clone(),
            reason: err.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: raw,
                reason: "URL cannot be used as a base".into(),
            });
        }
        Ok(url)
    }
}

/// Source configuration rejected by `validate`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("at least one accepted file extension is required")]
    NoAcceptedExtensions,
    #[error("invalid file extension `{0}`; give it without the leading dot")]
    InvalidExtension(String),
    #[error("invalid wikipedia language code `{0}`")]
    InvalidLanguage(String),
    #[error("wikipedia timeout must be at least one second")]
    ZeroTimeout,
    #[error("invalid wikipedia endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case() {
        let cfg = SourceConfig::default();
        assert!(cfg.accepts_extension("TXT"));
        assert!(cfg.accepts_extension("Md"));
        assert!(!cfg.accepts_extension("pdf"));
    }

    #[test]
    fn empty_extension_set_rejected() {
        let cfg = SourceConfig {
            accepted_extensions: Vec::new(),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoAcceptedExtensions));
    }

    #[test]
    fn dotted_extension_rejected() {
        let cfg = SourceConfig {
            accepted_extensions: vec![".txt".into()],
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidExtension(".txt".into()))
        );
    }

    #[test]
    fn language_drives_base_url() {
        let wiki = WikipediaConfig {
            language: "de".into(),
            ..Default::default()
        };
        assert_eq!(
            wiki.base_url().expect("valid").as_str(),
            "https://de.wikipedia.org/api/rest_v1"
        );
    }

    #[test]
    fn bad_language_rejected() {
        let wiki = WikipediaConfig {
            language: "en/../x".into(),
            ..Default::default()
        };
        assert!(matches!(
            wiki.validate(),
            Err(ConfigError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn zero_timeout_rejected() {
        let wiki = WikipediaConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(wiki.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn malformed_endpoint_rejected() {
        let wiki = WikipediaConfig {
            endpoint: Some("not a url".into()),
            ..Default::default()
        };
        assert!(matches!(
            wiki.validate(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: SourceConfig =
            serde_json::from_str(r#"{"wikipedia": {"language": "fr"}}"#).expect("parse");
        assert_eq!(cfg.accepted_extensions, vec!["txt", "md"]);
        assert_eq!(cfg.wikipedia.language, "fr");
        assert_eq!(cfg.wikipedia.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
