//! GUI module for the Walgen application
//!
//! This module provides the graphical user interface built with egui/eframe.
//!
//! ## Module Structure
//!
//! - `app` - Main GuiApp struct, state types, and core application logic
//! - `async_job` - Generic async job polling for background tasks
//! - `theme` - Centralized theme and styling system (AppTheme)
//! - `helpers` - Status styling, text truncation, paging math
//! - `notifications` - Notification entries shown in the toast and history
//! - `views` - View rendering functions (dashboard, generator, settings)
//! - `widgets` - Reusable UI widgets (ResultsTable)
//!
//! ## Usage
//!
//! ```no_run
//! use walgen::config::Config;
//! use walgen::gui;
//!
//! let config = Config::default();
//! gui::launch(config).expect("Failed to launch GUI");
//! ```

mod app;
pub mod async_job;
pub mod helpers;
pub mod notifications;
pub mod theme;
pub mod views;
pub mod widgets;

// Re-export main public API
pub use app::{launch, GuiApp, GuiSection};

// Re-export commonly used types from submodules for convenience
pub use async_job::AsyncJob;
pub use helpers::{page_count, status_color, status_icon, truncate_middle};
pub use notifications::NotificationEntry;
pub use theme::{configure_style, AppTheme};
pub use widgets::ResultsTable;
