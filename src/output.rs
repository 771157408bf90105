//! Output writers: the JSON data document and the failure log.

use crate::types::TireData;
use crate::Result;
use chrono::{SecondsFormat, Utc};
use std::fs;
use std::path::Path;

/// Serializes the record with stable, human-readable formatting and writes it
/// to `path`, replacing any prior file.
pub fn write_tire_data(data: &TireData, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// Writes the failure log, replacing any prior file.
///
/// Format: `Error at <ISO timestamp>` on the first line, the error detail on
/// the following lines.
pub fn write_error_log(detail: &str, path: &Path) -> Result<()> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    fs::write(path, format!("Error at {}\n{}", timestamp, detail))?;
    Ok(())
}
