//! Run configuration for the `typeprep` binary.
//!
//! There are no configuration files and no environment variables: every
//! setting comes from a command-line flag or its default. [`RunConfig`]
//! gathers those settings for the adapters and the normalizer.
//!
//! ```rust
//! use clap::Parser;
//! use typeprep::cli::Cli;
//! use typeprep::RunConfig;
//!
//! let cli = Cli::parse_from(["typeprep", "-w", "Rust", "--lang", "de", "--no-stats"]);
//! let config = RunConfig::from_cli(&cli);
//!
//! assert_eq!(config.source.wikipedia.language, "de");
//! assert!(config.prepare.processed);
//! assert!(!config.prepare.stats);
//! ```

use normalize::PrepareOptions;
use serde::{Deserialize, Serialize};
use source::{ConfigError, SourceConfig, WikipediaConfig};

use crate::cli::Cli;

/// Everything one run needs besides the input itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    pub source: SourceConfig,
    pub prepare: PrepareOptions,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            source: SourceConfig {
                wikipedia: WikipediaConfig {
                    language: cli.lang.clone(),
                    timeout_secs: cli.timeout_secs,
                    ..WikipediaConfig::default()
                },
                ..SourceConfig::default()
            },
            prepare: PrepareOptions {
                processed: !cli.raw,
                stats: !cli.no_stats,
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.source.validate()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let cli = Cli::parse_from(["typeprep", "-s", "x"]);
        assert_eq!(RunConfig::from_cli(&cli), RunConfig::default());
    }

    #[test]
    fn raw_flag_disables_processing() {
        let cli = Cli::parse_from(["typeprep", "-s", "x", "--raw"]);
        let config = RunConfig::from_cli(&cli);
        assert!(!config.prepare.processed);
        assert!(config.prepare.stats);
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let cli = Cli::parse_from(["typeprep", "-w", "Rust", "--timeout-secs", "0"]);
        assert_eq!(
            RunConfig::from_cli(&cli).validate(),
            Err(ConfigError::ZeroTimeout)
        );
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(RunConfig::default()).expect("serialize");
        assert_eq!(json["prepare"]["processed"], true);
        assert_eq!(json["source"]["accepted_extensions"][1], "md");
    }
}
