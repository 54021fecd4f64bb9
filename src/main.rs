#![windows_subsystem = "windows"]

use anyhow::Result;
use walgen::{config::Config, gui};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // Endpoint and batch policy come from the environment (or defaults);
    // the Settings view can adjust them for the session.
    let config = Config::default();
    gui::launch(config)?;

    Ok(())
}
