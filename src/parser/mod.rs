//! View document loading and discovery

pub mod directory;
pub mod filter;

pub use directory::{find_view_files, LocatorOptions};

use crate::error::{ParseError, ParseResult};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Parse a view document from disk.
///
/// Read failures are reported as parse errors so that a single unreadable
/// file only affects its own search.
pub fn parse_view_file(path: &Path) -> ParseResult<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ParseError::new(format!("Failed to read file: {}", e), None).with_path(path.to_path_buf())
    })?;

    parse_from_string(&content).map_err(|e| e.with_path(path.to_path_buf()))
}

/// Parse JSON from a string.
///
/// serde_json's recursion limit is disabled and the stack grows on demand,
/// so nesting is bounded only by the walker's `max_depth`.
pub fn parse_from_string(content: &str) -> ParseResult<Value> {
    // Exported views may carry a UTF-8 byte order mark
    let trimmed = content.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("Empty JSON document".to_string(), None));
    }

    let mut deserializer = serde_json::Deserializer::from_str(trimmed);
    deserializer.disable_recursion_limit();

    Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .and_then(|value| deserializer.end().map(|()| value))
        .map_err(|e| ParseError::new(describe_error(&e), extract_error_location(&e)))
}

/// serde_json's message without its trailing position; `ParseError` renders
/// the location itself
fn describe_error(error: &serde_json::Error) -> String {
    let message = error.to_string();
    let suffix = format!(" at line {} column {}", error.line(), error.column());
    let reason = message.strip_suffix(&suffix).unwrap_or(&message);
    format!("Invalid JSON: {}", reason)
}

/// Line and column reported by serde_json, when it has them
fn extract_error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    match (error.line(), error.column()) {
        (0, _) => None,
        (line, col) => Some((line, col)),
    }
}
