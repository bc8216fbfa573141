//! typeprep normalization layer.
//!
//! Turns arbitrary text into the single-line, `|`-joined form that typing
//! practice sites expect, and computes the statistics shown under it.
//!
//! ## What we do
//!
//! - Pad hyphens so they become their own word
//! - Fold newlines, tabs and space runs into single spaces
//! - Replace spaces with the `|` separator
//! - Split `.(` and `.[` so the bracket starts a new word
//! - Count characters and words, derive the speed needed for a 10 minute run
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. The rewrite table is fixed
//! and applied in order, so the same input always gives the same output.
//!
//! ```rust
//! use normalize::{normalize, compute_stats};
//!
//! let text = normalize("Ferris the crab\nis  orange.(really)");
//! assert_eq!(text.as_str(), "Ferris|the|crab|is|orange.|(really)");
//! assert_eq!(compute_stats(&text).word_count, 6);
//! ```

mod config;
mod document;
mod pipeline;
mod stats;

pub use crate::config::PrepareOptions;
pub use crate::document::{NormalizedText, OutputReport};
pub use crate::pipeline::{normalize, process, Rule, RULES, SEPARATOR};
pub use crate::stats::{compute_stats, required_wpm, TextStats, SESSION_MINUTES};
