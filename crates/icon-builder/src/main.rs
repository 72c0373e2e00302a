//! Icon-Builder: turn one source image into a platform icon set through an
//! external host process.

mod app;
mod app_command;
mod config;
mod console_input;
mod console_view;
mod error;
mod logging;
mod preview_summary;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    console_input::ConsoleInput,
    console_view::ConsoleView,
    error::{AppError, Result as AppResult},
    preview_summary::PreviewSummary,
};

use crate::config::Config;

use std::{path::PathBuf, sync::Arc, time::Duration};

use icon_builder_core::JsonLineBridge;
use tokio::{
    io::BufReader,
    sync::{mpsc, watch},
};
use tracing::error;

// Stdin reads run on a blocking thread that cannot be cancelled.
const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(500);

/// Application entry point.
///
/// The only argument is an optional path to the configuration file.
fn main() {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    let config = match Config::load(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let log_dir = match Config::log_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to resolve log directory: {}", e);
            std::process::exit(1);
        }
    };

    // Dropping the guard flushes buffered log lines.
    let _log_guard = match logging::init_logging(&config.logging, &log_dir) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            eprintln!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    let result = rt.block_on(async move {
        let bridge = JsonLineBridge::spawn(&config.host.program, &config.host.args)?;

        let (command_tx, command_rx) = mpsc::channel(32);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let console_input = ConsoleInput::new(command_tx);

        let app = App {
            config,
            bridge: Arc::new(bridge),
            command_rx,
            shutdown_tx,
        };

        tokio::join!(
            async {
                let stdin = BufReader::new(tokio::io::stdin());
                if let Err(e) = console_input.run(stdin, shutdown_rx).await {
                    error!(error = ?e, "Console input error");
                }
            },
            async {
                if let Err(e) = app.run().await {
                    error!(error = ?e, "App error");
                }
            }
        );

        Ok::<(), AppError>(())
    });

    rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);

    if let Err(e) = result {
        error!(error = ?e, "Failed to start");
        eprintln!("Failed to start: {}", e);
        std::process::exit(1);
    }
}
