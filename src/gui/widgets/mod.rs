//! Reusable UI widgets
//!
//! - `results_table` - Paginated table of per-handle wallet results

pub mod results_table;

pub use results_table::ResultsTable;
