//! Reading and writing JSON documents on disk.
//!
//! Reads never fail: a missing, unreadable, or malformed file is treated as an
//! empty object. Writes create parent directories and propagate any
//! filesystem error.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Reads the JSON object stored at `path`.
///
/// Returns an empty map when the file is missing, cannot be read, is not
/// valid JSON, or holds something other than an object at the top level.
pub fn read_document(path: &Path) -> Map<String, Value> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "document unreadable, treating as empty");
            return Map::new();
        }
    };

    match serde_json::from_str::<Value>(&contents) {
        Ok(Value::Object(map)) => {
            tracing::debug!(path = %path.display(), keys = map.len(), "loaded document");
            map
        }
        Ok(_) => {
            tracing::debug!(path = %path.display(), "document is not a JSON object, treating as empty");
            Map::new()
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "document is not valid JSON, treating as empty");
            Map::new()
        }
    }
}

/// Writes `document` to `path` as pretty-printed JSON with a trailing newline.
///
/// Missing parent directories are created first. Existing files are
/// overwritten.
pub fn write_document(path: &Path, document: &Map<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    tracing::debug!(path = %path.display(), "saved document");
    Ok(())
}
