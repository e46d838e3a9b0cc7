//! UI Patterns - Demo Entry Point
//!
//! Mounts the showcase page from config and walks through every tab,
//! printing the rendered markup after each step.
//!
//! Usage: `ui-patterns [config.toml]`

use std::path::PathBuf;
use std::process::ExitCode;

use ui_patterns::features::showcase::ShowcaseController;
use ui_patterns::logging::init_logging;
use ui_patterns::utils::{load_config, load_default_config};
use ui_patterns::Result;

fn run() -> Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => load_config(&PathBuf::from(path))?,
        None => load_default_config()?,
    };

    // Initialize tracing for logging
    let _guard = init_logging(&config.log)?;

    tracing::info!("Starting ui-patterns demo...");

    let mut controller = ShowcaseController::new(&config)?;
    let stdout = std::io::stdout();
    controller.run_script(&mut stdout.lock())?;

    tracing::info!(active = %controller.active_tab(), "demo finished");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
