//! Markdown aggregation
//!
//! Concatenates rule files into a single document with a horizontal rule
//! between consecutive files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::Result;
use crate::io::write_text;

/// Delimiter placed between consecutive files.
pub const SEPARATOR: &str = "\n\n---\n\n";

/// Outcome of combining a list of sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combined {
    /// The aggregated text.
    pub text: String,
    /// Sources that could not be read and contributed nothing.
    pub omitted: Vec<PathBuf>,
}

/// Read and join `sources` in order.
///
/// Unreadable files are skipped with a warning and recorded in
/// [`Combined::omitted`]; they never abort the aggregation.
pub fn combine_contents(sources: &[PathBuf]) -> Combined {
    let mut parts = Vec::with_capacity(sources.len());
    let mut omitted = Vec::new();

    for source in sources {
        match fs::read_to_string(source) {
            Ok(content) => parts.push(content),
            Err(e) => {
                warn!(path = %source.display(), error = %e, "Skipping unreadable rule file");
                omitted.push(source.clone());
            }
        }
    }

    Combined {
        text: parts.join(SEPARATOR),
        omitted,
    }
}

/// Combine `sources` and write the result atomically to `destination`.
///
/// Fails only if the destination cannot be created or written.
pub fn combine_markdown(sources: &[PathBuf], destination: &Path) -> Result<Combined> {
    let combined = combine_contents(sources);
    write_text(destination, &combined.text)?;
    Ok(combined)
}
