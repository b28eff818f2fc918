//! Input loading
//!
//! Reads the items to check from disk. Text files hold one token per line;
//! JSON files hold a single array of strings and nulls.

use super::error::CoverageResult;
use crate::types::InputFormat;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Items loaded from an input file
#[derive(Debug, Clone, PartialEq)]
pub enum InputItems {
    /// One raw token per line
    Lines(Vec<String>),
    /// Parsed JSON document, expected to be an array
    Json(Value),
}

impl InputItems {
    /// Number of items, when the shape is known to be a sequence
    pub fn len(&self) -> Option<usize> {
        match self {
            InputItems::Lines(lines) => Some(lines.len()),
            InputItems::Json(value) => value.as_array().map(Vec::len),
        }
    }

    /// Whether the input holds no items
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

/// Load input items from `path` in the given format
pub fn load_input<P: AsRef<Path>>(path: P, format: InputFormat) -> CoverageResult<InputItems> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let items = match format {
        InputFormat::Text => InputItems::Lines(split_lines(&content)),
        InputFormat::Json => InputItems::Json(serde_json::from_str(&content)?),
    };

    info!("Loaded input from {} ({} format)", path.display(), format);
    debug!("Input item count: {:?}", items.len());
    Ok(items)
}

/// Split text content into one token per line
///
/// A trailing newline does not produce an extra empty item; blank lines in the
/// middle of the file are kept so positions match line numbers minus one. A
/// leading UTF-8 byte order mark is dropped.
pub fn split_lines(content: &str) -> Vec<String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    content.lines().map(|line| line.trim_end_matches('\r').to_string()).collect()
}
