//! Icon Builder Core Library
//!
//! Asynchronous orchestration for a desktop icon-set builder. Image work and
//! native dialogs live in an external host process; this crate sequences
//! the user's triggers against that host and keeps the visible state
//! consistent while calls are in flight.
//!
//! # Example
//!
//! ```no_run
//! use icon_builder_core::{JsonLineBridge, Orchestrator, StatusTexts, Trigger};
//!
//! use std::{path::Path, sync::Arc};
//!
//! use tokio::sync::{mpsc, watch};
//!
//! #[tokio::main]
//! async fn main() -> icon_builder_core::CoreResult<()> {
//!     let bridge = Arc::new(JsonLineBridge::spawn(Path::new("icon-builder-host"), &[])?);
//!     let (view_tx, mut view_rx) = mpsc::unbounded_channel();
//!     let (trigger_tx, trigger_rx) = mpsc::channel(32);
//!     let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//!
//!     let orchestrator = Orchestrator::new(bridge, StatusTexts::default(), view_tx);
//!     tokio::spawn(orchestrator.run(trigger_rx, shutdown_rx));
//!
//!     let _ = trigger_tx.send(Trigger::PickSource).await;
//!     while let Some(update) = view_rx.recv().await {
//!         println!("{:?}", update);
//!     }
//!     Ok(())
//! }
//! ```

mod bridge;
mod controller;
mod error;
mod orchestrator;
mod state;

pub use {
    bridge::{BridgeCommand, HostBridge, JsonLineBridge},
    controller::{Completion, MISSING_SOURCE_REASON, MISSING_TARGET_REASON, Trigger},
    error::{BridgeError, Result as CoreResult},
    orchestrator::Orchestrator,
    state::{Phase, RequestCounter, RequestTag, StatusTexts, ViewState, ViewUpdate},
};

#[cfg(test)]
mod tests;
