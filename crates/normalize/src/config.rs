//! Per-call options for the preparation pipeline.
//!
//! ```rust
//! use normalize::PrepareOptions;
//!
//! let opts = PrepareOptions::default();
//! assert!(opts.processed);
//! assert!(opts.stats);
//!
//! let raw = PrepareOptions::raw();
//! assert!(!raw.processed);
//! ```

use serde::{Deserialize, Serialize};

/// Controls what an adapter hands back to its caller.
///
/// Serialized form:
///
/// ```json
/// { "processed": true, "stats": true }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PrepareOptions {
    /// Run the text through the normalizer. When false the raw text is
    /// returned untouched and `stats` is ignored.
    pub processed: bool,
    /// Append rendered statistics after the normalized text.
    pub stats: bool,
}

impl PrepareOptions {
    /// Options that return source text as-is.
    pub fn raw() -> Self {
        Self {
            processed: false,
            stats: false,
        }
    }
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            processed: true,
            stats: true,
        }
    }
}
