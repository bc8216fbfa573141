use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn, Level};

use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::types::RawText;

/// Reads a `.txt`/`.md` file into one line of raw text.
///
/// Checks run in this order: the path must be a regular file
/// ([`SourceError::NotFound`]), then its extension must be accepted by
/// `cfg` ([`SourceError::UnsupportedType`]). Each line loses its trailing
/// whitespace and the lines are joined with single spaces. A read failure
/// after the checks is returned as [`SourceError::Read`].
pub fn read_file(path: impl AsRef<Path>, cfg: &SourceConfig) -> Result<RawText, SourceError> {
    let path = path.as_ref();
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "source.read_file", path = %path.display());
    let _guard = span.enter();

    match read_file_inner(path, cfg) {
        Ok(text) => {
            info!(
                bytes = text.len(),
                elapsed_micros = start.elapsed().as_micros(),
                "read_file_success"
            );
            Ok(text)
        }
        Err(err) => {
            warn!(
                error = %err,
                elapsed_micros = start.elapsed().as_micros(),
                "read_file_failure"
            );
            Err(err)
        }
    }
}

fn read_file_inner(path: &Path, cfg: &SourceConfig) -> Result<RawText, SourceError> {
    if !path.is_file() {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| cfg.accepts_extension(ext));
    if !accepted {
        return Err(SourceError::UnsupportedType {
            path: path.to_path_buf(),
            accepted: cfg.accepted_extensions.clone(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(RawText::new(join_lines(&contents)))
}

/// Trims the end of every line and joins them with a single space.
pub fn join_lines(contents: &str) -> String {
    contents
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(" ")
}
