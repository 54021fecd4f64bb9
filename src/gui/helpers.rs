//! Utility functions for the GUI: status styling, truncation, paging math.

use super::theme::AppTheme;
use crate::types::ResultStatus;
use eframe::egui;

/// Color to render a result status in
pub fn status_color(status: ResultStatus, theme: &AppTheme) -> egui::Color32 {
    match status {
        ResultStatus::Pending => theme.text_secondary,
        ResultStatus::Success => theme.success,
        ResultStatus::Failed => theme.error,
    }
}

/// ASCII icon for a result status
pub fn status_icon(status: ResultStatus) -> &'static str {
    match status {
        ResultStatus::Pending => "[..]",
        ResultStatus::Success => "[OK]",
        ResultStatus::Failed => "[!!]",
    }
}

/// Truncate long strings (addresses, error messages) keeping both ends.
pub fn truncate_middle(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len || max_len < 8 {
        return text.to_string();
    }
    let keep = (max_len - 3) / 2;
    let head: String = text.chars().take(keep).collect();
    let tail: String = text
        .chars()
        .rev()
        .take(keep)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{}...{}", head, tail)
}

/// Number of pages needed to show `total` rows at `page_size` rows per page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_middle_short_strings_untouched() {
        assert_eq!(truncate_middle("0xabc", 20), "0xabc");
    }

    #[test]
    fn test_truncate_middle_long_string() {
        let addr = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
        let truncated = truncate_middle(addr, 15);
        assert!(truncated.len() <= 15);
        assert!(truncated.contains("..."));
        assert!(truncated.starts_with("0x742d"));
        assert!(truncated.ends_with("f44e"));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 25), 1);
        assert_eq!(page_count(25, 25), 1);
        assert_eq!(page_count(26, 25), 2);
        assert_eq!(page_count(7, 5), 2);
    }
}
