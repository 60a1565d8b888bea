//! JSON output formatting

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::outline::Page;

/// Serialize a list of pages as a JSON array.
///
/// Compact by default, matching what Roam itself exports.
pub fn to_json(pages: &[Page], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(pages)?
    } else {
        serde_json::to_string(pages)?
    };
    Ok(json)
}

/// Write an already serialized document, creating or truncating `path`.
pub fn write_json(path: &Path, json: &str) -> Result<()> {
    fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
