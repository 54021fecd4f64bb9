//! Common types shared across modules.

use serde::{Deserialize, Serialize};

/// Social platform a handle belongs to. Serialized in the upper-case form the
/// wallet endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HandleType {
    Twitter,
    Telegram,
}

impl Default for HandleType {
    fn default() -> Self {
        HandleType::Twitter
    }
}

impl HandleType {
    /// Map a CSV type column value to a handle type.
    /// Anything other than "telegram" (case-insensitive) defaults to Twitter.
    pub fn from_csv_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("telegram") {
            HandleType::Telegram
        } else {
            HandleType::Twitter
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HandleType::Twitter => "TWITTER",
            HandleType::Telegram => "TELEGRAM",
        }
    }
}

impl std::fmt::Display for HandleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staged input row: one social handle to pre-generate a wallet for.
/// Immutable once added; rows can be removed before a run is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleEntry {
    pub handle: String,
    pub kind: HandleType,
}

impl HandleEntry {
    pub fn new(handle: impl Into<String>, kind: HandleType) -> Self {
        Self {
            handle: handle.into(),
            kind,
        }
    }
}

/// Per-item outcome state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    /// Waiting for the endpoint response
    Pending,
    /// Endpoint returned a wallet address
    Success,
    /// Request failed or the endpoint rejected the handle
    Failed,
}

impl ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Pending => "pending",
            ResultStatus::Success => "success",
            ResultStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked result per submitted entry.
///
/// The `id` is assigned when a run is submitted and is unique within the run.
/// All reconciliation of batch responses back into the tracked set goes
/// through it, so duplicate `(handle, kind)` pairs stay independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletResult {
    pub id: u64,
    pub handle: String,
    pub kind: HandleType,
    pub wallet_address: String,
    pub status: ResultStatus,
    pub error_message: Option<String>,
}

impl WalletResult {
    /// Create the pending placeholder for a submitted entry.
    pub fn pending(id: u64, entry: &HandleEntry) -> Self {
        Self {
            id,
            handle: entry.handle.clone(),
            kind: entry.kind,
            wallet_address: String::new(),
            status: ResultStatus::Pending,
            error_message: None,
        }
    }

    pub fn succeeded(mut self, address: String) -> Self {
        self.wallet_address = address;
        self.status = ResultStatus::Success;
        self.error_message = None;
        self
    }

    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.wallet_address = String::new();
        self.status = ResultStatus::Failed;
        self.error_message = Some(message.into());
        self
    }
}

/// Overall state of a bulk run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Processing,
    Complete,
}

/// Transient run progress, recomputed after every batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_type_from_csv_token() {
        assert_eq!(HandleType::from_csv_token("telegram"), HandleType::Telegram);
        assert_eq!(HandleType::from_csv_token("TELEGRAM"), HandleType::Telegram);
        assert_eq!(HandleType::from_csv_token(" Telegram "), HandleType::Telegram);
        assert_eq!(HandleType::from_csv_token("twitter"), HandleType::Twitter);
        assert_eq!(HandleType::from_csv_token("discord"), HandleType::Twitter);
        assert_eq!(HandleType::from_csv_token(""), HandleType::Twitter);
    }

    #[test]
    fn test_handle_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&HandleType::Twitter).unwrap(),
            "\"TWITTER\""
        );
        assert_eq!(
            serde_json::to_string(&HandleType::Telegram).unwrap(),
            "\"TELEGRAM\""
        );
    }

    #[test]
    fn test_wallet_result_transitions() {
        let entry = HandleEntry::new("@alice", HandleType::Twitter);
        let pending = WalletResult::pending(3, &entry);
        assert_eq!(pending.id, 3);
        assert_eq!(pending.status, ResultStatus::Pending);
        assert!(pending.wallet_address.is_empty());

        let ok = pending.clone().succeeded("0xabc".to_string());
        assert_eq!(ok.status, ResultStatus::Success);
        assert_eq!(ok.wallet_address, "0xabc");
        assert!(ok.error_message.is_none());

        let failed = pending.failed("rate limited");
        assert_eq!(failed.status, ResultStatus::Failed);
        assert!(failed.wallet_address.is_empty());
        assert_eq!(failed.error_message.as_deref(), Some("rate limited"));
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(Progress::default().fraction(), 0.0);
        let half = Progress { current: 5, total: 10 };
        assert!((half.fraction() - 0.5).abs() < f32::EPSILON);
    }
}
