use crate::{AppCommand, AppError, AppResult, ConsoleView, config::Config};

use std::{panic::Location, sync::Arc, time::Duration};

use error_location::ErrorLocation;
use icon_builder_core::{HostBridge, Orchestrator, Phase, ViewUpdate};
use tokio::{
    sync::{mpsc, watch},
    time::timeout,
};
use tracing::{debug, error, info, instrument};

const ORCHESTRATOR_STOP_TIMEOUT: Duration = Duration::from_secs(1);

/// Main application state.
///
/// Owns the console view and forwards console commands to the
/// orchestrator task, which owns the view state.
pub struct App {
    pub(crate) config: Config,
    pub(crate) bridge: Arc<dyn HostBridge>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Icon-Builder starting");

        let (trigger_tx, trigger_rx) = mpsc::channel(32);
        let (view_tx, mut view_rx) = mpsc::unbounded_channel();

        let orchestrator = Orchestrator::new(
            Arc::clone(&self.bridge),
            self.config.status.texts(),
            view_tx,
        );
        let orchestrator_handle =
            tokio::spawn(orchestrator.run(trigger_rx, self.shutdown_tx.subscribe()));

        let mut view = ConsoleView::new(std::io::stdout());
        view.print_help()?;

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::Trigger(trigger) => {
                            if let Err(e) = trigger_tx.send(trigger).await {
                                error!(trigger = ?e.0, "Orchestrator stopped, shutting down");
                                break;
                            }
                        }
                        AppCommand::Help => log_write_error(view.print_help()),
                        AppCommand::Unknown(input) => log_write_error(view.print_unknown(&input)),
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                Some(update) = view_rx.recv() => {
                    log_write_error(view.render(&update));
                    self.after_update(&update);
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        if self.shutdown_tx.send(true).is_err() {
            debug!("No shutdown listeners left");
        }

        match timeout(ORCHESTRATOR_STOP_TIMEOUT, orchestrator_handle).await {
            Ok(Ok(final_view)) => info!(
                source_path = final_view.source_path(),
                target_dir = final_view.target_dir(),
                "Orchestrator stopped"
            ),
            Ok(Err(e)) => error!(error = ?e, "Orchestrator task failed"),
            Err(_) => info!("Orchestrator did not stop in time, dropping it"),
        }

        info!("Icon-Builder shut down successfully");

        Ok(())
    }

    fn after_update(&self, update: &ViewUpdate) {
        if let ViewUpdate::Status {
            phase: Phase::Done { target_dir },
            ..
        } = update
            && self.config.behavior.open_output_on_done
            && let Err(e) = open_output(target_dir)
        {
            error!(error = ?e, "Failed to open output directory");
        }
    }
}

fn log_write_error(result: AppResult<()>) {
    if let Err(e) = result {
        error!(error = ?e, "Failed to write to console");
    }
}

#[track_caller]
fn open_output(target_dir: &str) -> AppResult<()> {
    open::that(target_dir).map_err(|e| AppError::OpenFailed {
        path: target_dir.to_string(),
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!(target_dir, "Opened output directory");

    Ok(())
}
