//! Batched dispatch of wallet generation requests.
//!
//! Entries are processed in contiguous chunks of `batch_size`. All requests
//! within a chunk are fired concurrently and joined; chunks run sequentially
//! with a pacing delay between them. Per-item failures are captured in the
//! returned results and never abort the run: once started, a run always
//! reaches completion.

use crate::client::WalletApiClient;
use crate::config::Config;
use crate::types::{Progress, WalletResult};
use futures_util::future::join_all;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// Batch policy for a run
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub batch_size: usize,
    pub batch_delay: std::time::Duration,
}

impl From<&Config> for BatchOptions {
    fn from(config: &Config) -> Self {
        Self {
            batch_size: config.batch_size.max(1),
            batch_delay: config.batch_delay(),
        }
    }
}

/// Progress events streamed to the GUI while a run executes
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// One chunk finished; carries its results and the recomputed progress
    BatchCompleted {
        results: Vec<WalletResult>,
        progress: Progress,
    },
    /// Every chunk has been processed
    Completed,
}

/// Run the dispatcher over a work list of pending results.
///
/// The work list carries the ids assigned at submission time, so the caller
/// can fold the returned results back into its tracked set regardless of the
/// order requests complete in. `events` receives a `BatchCompleted` after
/// each chunk and a final `Completed`; a closed receiver is tolerated so a
/// run keeps going even if the listener went away.
pub async fn process_batches(
    client: &WalletApiClient,
    options: BatchOptions,
    work: Vec<WalletResult>,
    events: Option<&UnboundedSender<RunEvent>>,
) -> Vec<WalletResult> {
    let total = work.len();
    let batch_size = options.batch_size.max(1);
    let batch_count = total.div_ceil(batch_size);
    info!(
        total,
        batch_size,
        batch_count,
        endpoint = %client.endpoint(),
        "starting bulk generation run"
    );

    let mut all_results: Vec<WalletResult> = Vec::with_capacity(total);
    let mut processed = 0;

    for (batch_index, chunk) in work.chunks(batch_size).enumerate() {
        debug!(batch_index, size = chunk.len(), "processing batch");
        let batch_results = process_chunk(client, chunk).await;

        processed = (processed + chunk.len()).min(total);
        let progress = Progress {
            current: processed,
            total,
        };

        if let Some(tx) = events {
            let _ = tx.send(RunEvent::BatchCompleted {
                results: batch_results.clone(),
                progress,
            });
        }
        all_results.extend(batch_results);

        // Pacing delay between batches, skipped after the last one
        if processed < total {
            debug!(batch_index, delay_ms = options.batch_delay.as_millis() as u64, "pausing between batches");
            tokio::time::sleep(options.batch_delay).await;
        }
    }

    if let Some(tx) = events {
        let _ = tx.send(RunEvent::Completed);
    }
    info!(total, "bulk generation run complete");
    all_results
}

/// Fire all requests in one chunk concurrently and join them.
async fn process_chunk(client: &WalletApiClient, chunk: &[WalletResult]) -> Vec<WalletResult> {
    let requests = chunk.iter().map(|item| {
        let item = item.clone();
        async move {
            match client.generate_wallet(&item.handle, item.kind).await {
                Ok(address) => item.succeeded(address),
                Err(e) => {
                    warn!(handle = %item.handle, kind = %item.kind, error = %e, "wallet generation failed");
                    item.failed(e.to_string())
                }
            }
        }
    });

    let mut results = join_all(requests).await;

    // A chunk must yield exactly one result per entry; fill any gap with
    // per-item diagnostics instead of aborting the run.
    if results.len() != chunk.len() {
        warn!(
            expected = chunk.len(),
            got = results.len(),
            "batch result count mismatch"
        );
        for item in chunk.iter().skip(results.len()) {
            results.push(
                item.clone()
                    .failed("no result returned for this entry in its batch"),
            );
        }
        results.truncate(chunk.len());
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BATCH_DELAY_MS, DEFAULT_BATCH_SIZE};

    #[test]
    fn test_batch_options_from_config() {
        let config = Config::new("http://localhost:3000/api/wallet/generate".to_string());
        let options = BatchOptions::from(&config);
        assert_eq!(options.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(
            options.batch_delay,
            std::time::Duration::from_millis(DEFAULT_BATCH_DELAY_MS)
        );
    }

    #[test]
    fn test_batch_options_clamps_zero_batch_size() {
        let mut config = Config::new("http://localhost:3000/api/wallet/generate".to_string());
        config.batch_size = 0;
        assert_eq!(BatchOptions::from(&config).batch_size, 1);
    }
}
