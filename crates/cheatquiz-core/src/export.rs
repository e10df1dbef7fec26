//! JSON export of parsed records for web front-ends.
//!
//! The output is an array of `{"category", "question", "solution"}` objects,
//! keys always in that order, pretty-printed with two-space indentation.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Record;

/// Serialize records to the export format.
pub fn to_json(records: &[Record]) -> Result<String> {
    serde_json::to_string_pretty(records).context("failed to serialize quiz records")
}

/// Write records to `path`, creating parent directories as needed.
pub fn write_json(records: &[Record], path: &Path) -> Result<()> {
    let json = to_json(records)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    tracing::info!(path = %path.display(), records = records.len(), "wrote JSON export");
    Ok(())
}
