use tracing::{debug, warn};

use crate::error::SourceError;
use crate::types::RawText;

/// Accepts literal text as-is. Zero-length text is [`SourceError::EmptyInput`];
/// whitespace-only text is accepted and left to the normalizer.
pub fn read_string(text: &str) -> Result<RawText, SourceError> {
    if text.is_empty() {
        warn!("read_string_empty");
        return Err(SourceError::EmptyInput);
    }
    debug!(bytes = text.len(), "read_string_success");
    Ok(RawText::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_rejected() {
        assert!(matches!(read_string(""), Err(SourceError::EmptyInput)));
    }

    #[test]
    fn text_passes_through_unchanged() {
        let raw = read_string("  keep\tme\n").expect("non-empty");
        assert_eq!(raw.as_str(), "  keep\tme\n");
    }

    #[test]
    fn whitespace_only_is_not_empty() {
        assert!(read_string(" ").is_ok());
    }
}
