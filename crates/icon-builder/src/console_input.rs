//! Console input adapter.
//!
//! Reads one command per line and forwards it to the main application.
//! End of input or a read error counts as a shutdown request. Lines that
//! are not valid UTF-8 are decoded lossily.

use crate::{AppCommand, AppError, AppResult};

use std::{borrow::Cow, panic::Location};

use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::{mpsc, watch},
};
use tracing::{debug, error, info, instrument, warn};

/// Turns console lines into [`AppCommand`]s.
pub struct ConsoleInput {
    command_tx: mpsc::Sender<AppCommand>,
}

impl ConsoleInput {
    /// Create an input adapter sending commands on `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Read `input` until it ends or a shutdown signal is received.
    #[instrument(skip_all)]
    pub async fn run<R>(&self, input: R, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut input = input;
        let mut buf = Vec::new();

        loop {
            buf.clear();

            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Console input shutting down");
                    break;
                }
                read = input.read_until(b'\n', &mut buf) => match read {
                    Ok(0) => {
                        info!("Console input closed");
                        self.send(AppCommand::Shutdown).await?;
                        break;
                    }
                    Ok(_) => {
                        let line = String::from_utf8_lossy(&buf);
                        if matches!(line, Cow::Owned(_)) {
                            warn!("Console input is not valid UTF-8");
                        }
                        if let Some(command) = AppCommand::parse(&line) {
                            debug!(command = ?command, "Console command");
                            self.send(command).await?;
                        }
                    }
                    Err(e) => {
                        error!(error = ?e, "Failed to read console input");
                        self.send(AppCommand::Shutdown).await?;
                        return Err(e.into());
                    }
                },
            }
        }

        Ok(())
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send console command: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
