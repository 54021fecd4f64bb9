//! Tracked result set for a bulk generation run.
//!
//! The tracker owns one `WalletResult` per submitted entry, in submission
//! order. Batch responses are folded back in by result id, and a revision
//! counter bumps on every visible change so the UI can notice updates without
//! diffing the whole vector.

use crate::types::{HandleEntry, Progress, ResultStatus, WalletResult};
use tracing::warn;

#[derive(Debug, Default)]
pub struct ResultTracker {
    results: Vec<WalletResult>,
    revision: u64,
}

/// Derived counts over the tracked result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub pending: usize,
}

impl RunSummary {
    /// Check if every item has reached a terminal status
    pub fn is_complete(&self) -> bool {
        self.pending == 0
    }

    /// Get a one-line summary string
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Pending: {} | Success: {} | Failed: {}",
            self.total, self.pending, self.success, self.failed
        )
    }
}

impl ResultTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[WalletResult] {
        &self.results
    }

    /// Monotonic change counter; bumps whenever the tracked set is mutated.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Start a fresh run: one pending placeholder per entry, ids assigned in
    /// submission order. Returns clones of the placeholders as the dispatch
    /// work list.
    pub fn begin_run(&mut self, entries: &[HandleEntry]) -> Vec<WalletResult> {
        self.results = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| WalletResult::pending(index as u64, entry))
            .collect();
        self.revision += 1;
        self.results.clone()
    }

    /// Fold a batch of completed results back in, matching by id. Returns the
    /// number of results applied; unknown ids are logged and dropped rather
    /// than aborting the run.
    pub fn record_batch(&mut self, batch: &[WalletResult]) -> usize {
        let mut applied = 0;
        for incoming in batch {
            match self.results.iter_mut().find(|r| r.id == incoming.id) {
                Some(slot) => {
                    *slot = incoming.clone();
                    applied += 1;
                }
                None => {
                    warn!(id = incoming.id, handle = %incoming.handle, "dropping result with unknown id");
                }
            }
        }
        if applied > 0 {
            self.revision += 1;
        }
        applied
    }

    /// Flip all failed items back to pending (clearing address and error) and
    /// return them as the work list for a retry dispatch. Non-failed items
    /// are untouched.
    pub fn mark_failed_pending(&mut self) -> Vec<WalletResult> {
        let mut work = Vec::new();
        for result in &mut self.results {
            if result.status == ResultStatus::Failed {
                result.status = ResultStatus::Pending;
                result.wallet_address.clear();
                result.error_message = None;
                work.push(result.clone());
            }
        }
        if !work.is_empty() {
            self.revision += 1;
        }
        work
    }

    /// Clear everything back to the idle state.
    pub fn reset(&mut self) {
        self.results.clear();
        self.revision += 1;
    }

    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary {
            total: self.results.len(),
            ..Default::default()
        };
        for result in &self.results {
            match result.status {
                ResultStatus::Pending => summary.pending += 1,
                ResultStatus::Success => summary.success += 1,
                ResultStatus::Failed => summary.failed += 1,
            }
        }
        summary
    }

    /// Progress over the current set: items in a terminal status vs total.
    pub fn progress(&self) -> Progress {
        let summary = self.summary();
        Progress {
            current: summary.success + summary.failed,
            total: summary.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HandleType;

    fn entries(n: usize) -> Vec<HandleEntry> {
        (0..n)
            .map(|i| HandleEntry::new(format!("@user{}", i), HandleType::Twitter))
            .collect()
    }

    #[test]
    fn test_begin_run_matches_entry_order_and_length() {
        let mut tracker = ResultTracker::new();
        let work = tracker.begin_run(&entries(7));
        assert_eq!(work.len(), 7);
        assert_eq!(tracker.results().len(), 7);
        for (index, result) in tracker.results().iter().enumerate() {
            assert_eq!(result.id, index as u64);
            assert_eq!(result.handle, format!("@user{}", index));
            assert_eq!(result.status, ResultStatus::Pending);
        }
    }

    #[test]
    fn test_record_batch_overwrites_by_id() {
        let mut tracker = ResultTracker::new();
        let work = tracker.begin_run(&entries(3));
        let batch = vec![
            work[2].clone().succeeded("0xccc".to_string()),
            work[0].clone().failed("boom"),
        ];
        assert_eq!(tracker.record_batch(&batch), 2);

        let results = tracker.results();
        assert_eq!(results[0].status, ResultStatus::Failed);
        assert_eq!(results[1].status, ResultStatus::Pending);
        assert_eq!(results[2].status, ResultStatus::Success);
        assert_eq!(results[2].wallet_address, "0xccc");
    }

    #[test]
    fn test_record_batch_ignores_unknown_ids() {
        let mut tracker = ResultTracker::new();
        let work = tracker.begin_run(&entries(1));
        let mut stray = work[0].clone().succeeded("0x1".to_string());
        stray.id = 99;
        assert_eq!(tracker.record_batch(&[stray]), 0);
        assert_eq!(tracker.results()[0].status, ResultStatus::Pending);
    }

    #[test]
    fn test_revision_bumps_on_change() {
        let mut tracker = ResultTracker::new();
        let r0 = tracker.revision();
        let work = tracker.begin_run(&entries(2));
        assert!(tracker.revision() > r0);

        let r1 = tracker.revision();
        tracker.record_batch(&[work[0].clone().succeeded("0x1".to_string())]);
        assert!(tracker.revision() > r1);
    }

    #[test]
    fn test_mark_failed_pending_touches_only_failures() {
        let mut tracker = ResultTracker::new();
        let work = tracker.begin_run(&entries(3));
        tracker.record_batch(&[
            work[0].clone().succeeded("0xaaa".to_string()),
            work[1].clone().failed("rate limited"),
            work[2].clone().failed("timeout"),
        ]);

        let retry_work = tracker.mark_failed_pending();
        assert_eq!(retry_work.len(), 2);
        assert_eq!(retry_work[0].id, 1);
        assert_eq!(retry_work[1].id, 2);

        let results = tracker.results();
        assert_eq!(results[0].status, ResultStatus::Success);
        assert_eq!(results[0].wallet_address, "0xaaa");
        assert_eq!(results[1].status, ResultStatus::Pending);
        assert!(results[1].error_message.is_none());
    }

    #[test]
    fn test_duplicate_handles_stay_independent() {
        let mut tracker = ResultTracker::new();
        let dupes = vec![
            HandleEntry::new("@same", HandleType::Twitter),
            HandleEntry::new("@same", HandleType::Twitter),
        ];
        let work = tracker.begin_run(&dupes);
        tracker.record_batch(&[
            work[0].clone().succeeded("0xfirst".to_string()),
            work[1].clone().failed("nope"),
        ]);

        let retry_work = tracker.mark_failed_pending();
        assert_eq!(retry_work.len(), 1);
        assert_eq!(retry_work[0].id, 1);
        // The successful twin is untouched
        assert_eq!(tracker.results()[0].wallet_address, "0xfirst");
    }

    #[test]
    fn test_summary_and_progress() {
        let mut tracker = ResultTracker::new();
        let work = tracker.begin_run(&entries(4));
        tracker.record_batch(&[
            work[0].clone().succeeded("0x1".to_string()),
            work[1].clone().failed("x"),
        ]);

        let summary = tracker.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.pending, 2);
        assert!(!summary.is_complete());
        assert_eq!(tracker.progress(), Progress { current: 2, total: 4 });
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut tracker = ResultTracker::new();
        tracker.begin_run(&entries(2));
        tracker.reset();
        assert!(tracker.is_empty());
        assert_eq!(tracker.summary(), RunSummary::default());
    }
}
