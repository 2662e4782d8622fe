// src/loader.rs

//! Reads markup files from disk and strips the parts the graph never sees.

use std::fs;
use std::path::Path;

use crate::errors::Result;

/// Load a markup file and drop comment and blank lines.
///
/// The parser re-trims what it receives, so this is purely about keeping
/// file-level concerns (comments, layout) out of the graph core.
pub fn read_markup(path: impl AsRef<Path>) -> Result<String> {
    let contents = fs::read_to_string(path.as_ref())?;
    Ok(strip_comments(&contents))
}

/// Remove `#` comment lines and blank lines, trimming each remaining line.
pub fn strip_comments(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}
