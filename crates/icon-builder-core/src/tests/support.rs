#![allow(clippy::unwrap_used)]

use crate::{
    BridgeCommand, BridgeError, CoreResult, HostBridge, Orchestrator, Phase, StatusTexts, Trigger,
    ViewUpdate,
    bridge::{decode_picked_path, decode_preview},
};

use std::{panic::Location, sync::Arc, time::Duration};

use async_trait::async_trait;
use error_location::ErrorLocation;
use serde_json::Value;
use tokio::{
    sync::{mpsc, oneshot},
    time::timeout,
};

const STEP_TIMEOUT: Duration = Duration::from_secs(5);

/// A bridge call parked until the test answers it.
pub(crate) struct PendingCall {
    pub(crate) command: BridgeCommand,
    reply_tx: oneshot::Sender<Result<Value, String>>,
}

impl PendingCall {
    pub(crate) fn reply_path(self, path: &str) {
        let _ = self.reply_tx.send(Ok(Value::String(path.to_string())));
    }

    pub(crate) fn reply_cancelled(self) {
        let _ = self.reply_tx.send(Ok(Value::Null));
    }

    pub(crate) fn reply_preview(self, payload: &str) {
        let _ = self.reply_tx.send(Ok(Value::String(payload.to_string())));
    }

    pub(crate) fn reply_ok(self) {
        let _ = self.reply_tx.send(Ok(Value::Null));
    }

    pub(crate) fn reply_error(self, reason: &str) {
        let _ = self.reply_tx.send(Err(reason.to_string()));
    }
}

/// In-memory host whose calls block until the test replies, so any
/// interleaving of completions can be forced.
pub(crate) struct ScriptedBridge {
    call_tx: mpsc::UnboundedSender<PendingCall>,
}

impl ScriptedBridge {
    async fn call(&self, command: BridgeCommand) -> CoreResult<Value> {
        let name = command.name();
        let (reply_tx, reply_rx) = oneshot::channel();
        self.call_tx
            .send(PendingCall { command, reply_tx })
            .map_err(|_| BridgeError::host_exited())?;

        match reply_rx.await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(reason)) => Err(BridgeError::HostFailed {
                command: name,
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(_) => Err(BridgeError::host_exited()),
        }
    }
}

#[async_trait]
impl HostBridge for ScriptedBridge {
    async fn select_image(&self) -> CoreResult<Option<String>> {
        decode_picked_path(self.call(BridgeCommand::SelectImage).await?)
    }

    async fn get_preview(&self, image_path: &str) -> CoreResult<String> {
        let command = BridgeCommand::GetPreview {
            image_path: image_path.to_string(),
        };
        decode_preview(self.call(command).await?)
    }

    async fn select_directory(&self) -> CoreResult<Option<String>> {
        decode_picked_path(self.call(BridgeCommand::SelectDirectory).await?)
    }

    async fn generate_icon_set(&self, image_path: &str, target_dir: &str) -> CoreResult<()> {
        let command = BridgeCommand::GenerateIconSet {
            image_path: image_path.to_string(),
            target_dir: target_dir.to_string(),
        };
        self.call(command).await.map(|_| ())
    }
}

pub(crate) fn scripted_bridge() -> (Arc<ScriptedBridge>, mpsc::UnboundedReceiver<PendingCall>) {
    let (call_tx, call_rx) = mpsc::unbounded_channel();
    (Arc::new(ScriptedBridge { call_tx }), call_rx)
}

/// Orchestrator wired to a [`ScriptedBridge`], driven step by step.
pub(crate) struct Harness {
    pub(crate) orchestrator: Orchestrator,
    call_rx: mpsc::UnboundedReceiver<PendingCall>,
    view_rx: mpsc::UnboundedReceiver<ViewUpdate>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let (bridge, call_rx) = scripted_bridge();
        let (view_tx, view_rx) = mpsc::unbounded_channel();
        let orchestrator = Orchestrator::new(bridge, StatusTexts::default(), view_tx);

        Self {
            orchestrator,
            call_rx,
            view_rx,
        }
    }

    pub(crate) fn trigger(&mut self, trigger: Trigger) {
        self.orchestrator.handle_trigger(trigger);
    }

    /// Next bridge call issued by the orchestrator.
    pub(crate) async fn next_call(&mut self) -> PendingCall {
        timeout(STEP_TIMEOUT, self.call_rx.recv())
            .await
            .unwrap()
            .unwrap()
    }

    /// Assert that no bridge call is waiting to be answered.
    pub(crate) async fn assert_no_call(&mut self) {
        tokio::task::yield_now().await;
        assert!(self.call_rx.try_recv().is_err());
    }

    /// Apply the next bridge completion.
    pub(crate) async fn settle(&mut self) {
        let processed = timeout(STEP_TIMEOUT, self.orchestrator.process_next_completion())
            .await
            .unwrap();
        assert!(processed);
    }

    /// Every update published since the last drain.
    pub(crate) fn drain_updates(&mut self) -> Vec<ViewUpdate> {
        let mut updates = Vec::new();
        while let Ok(update) = self.view_rx.try_recv() {
            updates.push(update);
        }
        updates
    }

    /// Every phase published since the last drain, ignoring other updates.
    pub(crate) fn drain_phases(&mut self) -> Vec<Phase> {
        self.drain_updates()
            .into_iter()
            .filter_map(|update| match update {
                ViewUpdate::Status { phase, .. } => Some(phase),
                _ => None,
            })
            .collect()
    }

    /// Run a full source pick resolving to `path` and `preview`.
    pub(crate) async fn select_source(&mut self, path: &str, preview: &str) {
        self.trigger(Trigger::PickSource);
        let pick = self.next_call().await;
        assert_eq!(pick.command, BridgeCommand::SelectImage);
        pick.reply_path(path);
        self.settle().await;

        let fetch = self.next_call().await;
        assert_eq!(
            fetch.command,
            BridgeCommand::GetPreview {
                image_path: path.to_string()
            }
        );
        fetch.reply_preview(preview);
        self.settle().await;
    }

    /// Run a full destination pick resolving to `path`.
    pub(crate) async fn select_destination(&mut self, path: &str) {
        self.trigger(Trigger::PickDestination);
        let pick = self.next_call().await;
        assert_eq!(pick.command, BridgeCommand::SelectDirectory);
        pick.reply_path(path);
        self.settle().await;
    }
}
