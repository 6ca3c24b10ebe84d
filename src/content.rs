//! Turning article markup and local files into word sequences.

use anyhow::{Context, Result};
use std::path::Path;

/// Wide enough that the converter never wraps; words are split on whitespace anyway.
const RENDER_WIDTH: usize = 10_000;

/// Convert entry markup to plain text. Falls back to the raw markup if it cannot be parsed.
pub fn to_plain_text(markup: &str) -> String {
    match html2text::from_read(markup.as_bytes(), RENDER_WIDTH) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "html conversion failed, reading raw markup");
            markup.to_string()
        }
    }
}

/// Whitespace-separated tokens
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Read a local file to read from instead of the remote service.
pub fn load_file(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;
    Ok(words(&text))
}
