//! Parsing of handle lists from CSV text and manual form input.
//!
//! The CSV format is `handle,type` per line with an optional header row.
//! Parse failures here are user-facing: the GUI surfaces them as blocking
//! alerts and never starts a run with an empty entry list.

use crate::types::{HandleEntry, HandleType};
use anyhow::{anyhow, Result};

/// Parse raw CSV text into an ordered list of handle entries.
///
/// - Blank lines are discarded.
/// - A first line containing both a "handle" token and a "type"/"platform"
///   token (case-insensitive) is treated as a header and skipped.
/// - Each data line is split on commas; the first field is the handle, the
///   second selects the platform (`telegram` maps to Telegram, everything
///   else to Twitter). Lines with fewer than two fields are skipped.
pub fn parse_handle_csv(text: &str) -> Result<Vec<HandleEntry>> {
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(anyhow!("The CSV file is empty"));
    }

    let start_index = if has_header(lines[0]) { 1 } else { 0 };

    let mut entries = Vec::new();
    for line in &lines[start_index..] {
        let parts: Vec<&str> = line.split(',').map(|part| part.trim()).collect();
        if parts.len() >= 2 {
            entries.push(HandleEntry::new(
                parts[0],
                HandleType::from_csv_token(parts[1]),
            ));
        }
    }

    if entries.is_empty() {
        return Err(anyhow!("No valid entries found in the CSV file"));
    }

    Ok(entries)
}

/// Check whether a line looks like a header row.
fn has_header(first_line: &str) -> bool {
    let lowered = first_line.to_lowercase();
    lowered.contains("handle") && (lowered.contains("type") || lowered.contains("platform"))
}

/// Validate a manually entered handle and build an entry from it.
pub fn manual_entry(handle: &str, kind: HandleType) -> Result<HandleEntry> {
    let trimmed = handle.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Handle cannot be empty"));
    }
    Ok(HandleEntry::new(trimmed, kind))
}
