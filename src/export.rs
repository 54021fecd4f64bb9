//! CSV export of run results plus the input template.

use crate::types::WalletResult;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Header row of the results export
pub const RESULT_HEADERS: [&str; 5] = ["Handle", "Type", "Wallet Address", "Status", "Error"];

/// Two-line example CSV offered to users as a starting point
pub const TEMPLATE_CSV: &str = "handle,type\n@username1,twitter\n@username2,telegram\n";

/// Serialize results to CSV text. Output is deterministic for a given result
/// set, so exporting the same completed run twice is byte-identical.
pub fn results_to_csv(results: &[WalletResult]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(RESULT_HEADERS)?;
    for result in results {
        writer.write_record([
            result.handle.as_str(),
            result.kind.as_str(),
            result.wallet_address.as_str(),
            result.status.as_str(),
            result.error_message.as_deref().unwrap_or(""),
        ])?;
    }
    let bytes = writer.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("exported CSV was not valid UTF-8")
}

/// Write the results CSV to a file.
pub fn write_results_csv(path: &Path, results: &[WalletResult]) -> Result<()> {
    let csv = results_to_csv(results)?;
    fs::write(path, csv).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Write the input template CSV to a file.
pub fn write_template(path: &Path) -> Result<()> {
    fs::write(path, TEMPLATE_CSV)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Timestamped default file name for a results export.
pub fn default_export_filename() -> String {
    format!(
        "wallet-results-{}.csv",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HandleEntry, HandleType, WalletResult};

    fn sample_results() -> Vec<WalletResult> {
        let alice = HandleEntry::new("@alice", HandleType::Twitter);
        let bob = HandleEntry::new("@bob", HandleType::Telegram);
        vec![
            WalletResult::pending(0, &alice).succeeded("0xaaa".to_string()),
            WalletResult::pending(1, &bob).failed("rate limited"),
        ]
    }

    #[test]
    fn test_results_to_csv_layout() {
        let csv = results_to_csv(&sample_results()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Handle,Type,Wallet Address,Status,Error");
        assert_eq!(lines[1], "@alice,TWITTER,0xaaa,success,");
        assert_eq!(lines[2], "@bob,TELEGRAM,,failed,rate limited");
    }

    #[test]
    fn test_results_to_csv_is_idempotent() {
        let results = sample_results();
        let first = results_to_csv(&results).unwrap();
        let second = results_to_csv(&results).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_results_to_csv_empty_set_is_header_only() {
        let csv = results_to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_results_to_csv_quotes_embedded_commas() {
        let entry = HandleEntry::new("@odd", HandleType::Twitter);
        let result = WalletResult::pending(0, &entry).failed("bad, very bad");
        let csv = results_to_csv(&[result]).unwrap();
        assert!(csv.contains("\"bad, very bad\""));
    }

    #[test]
    fn test_template_roundtrips_through_parser() {
        let entries = crate::parser::parse_handle_csv(TEMPLATE_CSV).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, HandleType::Twitter);
        assert_eq!(entries[1].kind, HandleType::Telegram);
    }

    #[test]
    fn test_default_export_filename_shape() {
        let name = default_export_filename();
        assert!(name.starts_with("wallet-results-"));
        assert!(name.ends_with(".csv"));
    }
}
