//! View modules for each GUI section
//!
//! Each module adds rendering methods to GuiApp:
//! - `generator` - CSV/manual handle input, bulk run, retry, export
//! - `dashboard` - operation log viewer and about panel
//! - `settings` - session-only configuration editing

pub mod dashboard;
pub mod generator;
pub mod settings;
