//! Walgen - Bulk Wallet Pre-Generation Utility GUI
//!
//! Loads a list of social handles (CSV upload or manual entry), calls the
//! wallet pre-generation endpoint once per handle in bounded-concurrency
//! batches, tracks per-item success/failure, lets the user retry failures,
//! and exports the result set back to CSV.

pub mod batch;
pub mod client;
pub mod config;
pub mod export;
pub mod gui;
pub mod operation_log;
pub mod parser;
pub mod tracker;
pub mod types;
