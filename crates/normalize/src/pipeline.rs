use tracing::debug;

use crate::config::PrepareOptions;
use crate::document::{NormalizedText, OutputReport};
use crate::stats::compute_stats;

/// Reserved character marking word boundaries in normalized text.
pub const SEPARATOR: char = '|';

/// A literal find/replace step of the normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub find: &'static str,
    pub replace: &'static str,
}

impl Rule {
    const fn new(find: &'static str, replace: &'static str) -> Self {
        Self { find, replace }
    }

    /// Replaces every non-overlapping occurrence of `find`, scanning left to right.
    pub fn apply(&self, text: &str) -> String {
        text.replace(self.find, self.replace)
    }
}

/// The fixed rewrite table. Order is load-bearing: every rule sees the
/// output of the ones before it.
pub const RULES: [Rule; 9] = [
    Rule::new("-", " - "),
    Rule::new("\n\n", " "),
    Rule::new("\n", " "),
    Rule::new("\t", " "),
    Rule::new("   ", " "),
    Rule::new("  ", " "),
    Rule::new(" ", "|"),
    // Spaces are gone by now, so the repairs insert the separator directly.
    Rule::new(".(", ".|("),
    Rule::new(".[", ".|["),
];

/// Rewrites `text` into separator-joined practice text.
///
/// Total over all inputs, including the empty string.
pub fn normalize(text: &str) -> NormalizedText {
    let mut out = text.to_string();
    for rule in RULES.iter() {
        // Skip the allocation for rules that cannot fire.
        if out.contains(rule.find) {
            out = rule.apply(&out);
        }
    }
    NormalizedText::new(out)
}

/// Runs normalization and, if requested, statistics over `text`.
///
/// `opts.processed` is not consulted here; callers that want raw text
/// skip this function entirely.
pub fn process(text: &str, opts: &PrepareOptions) -> OutputReport {
    let normalized = normalize(text);
    let stats = opts.stats.then(|| compute_stats(normalized.as_str()));
    debug!(
        input_len = text.len(),
        normalized_len = normalized.as_str().len(),
        with_stats = stats.is_some(),
        "normalize_process"
    );
    OutputReport::new(normalized, stats)
}
