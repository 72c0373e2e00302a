//! Single event loop owning the view state.
//!
//! Triggers and bridge completions are serviced one at a time on one task.
//! Bridge calls run in the background, so the loop stays responsive while
//! any number of calls are outstanding.

use crate::{
    bridge::HostBridge,
    controller::{
        Completion, DestinationController, Dispatcher, GenerationController, SelectionController,
        Trigger,
    },
    state::{StatusTexts, ViewState, ViewUpdate},
};

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument};

enum LoopEvent {
    Trigger(Trigger),
    Completion(Completion),
}

/// Owns the [`ViewState`] and routes triggers and completions to the
/// three controllers.
pub struct Orchestrator {
    view: ViewState,
    selection: SelectionController,
    destination: DestinationController,
    generation: GenerationController,
    dispatcher: Dispatcher,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    view_tx: mpsc::UnboundedSender<ViewUpdate>,
}

impl Orchestrator {
    /// Create an orchestrator publishing every visible change on `view_tx`.
    pub fn new(
        bridge: Arc<dyn HostBridge>,
        texts: StatusTexts,
        view_tx: mpsc::UnboundedSender<ViewUpdate>,
    ) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();

        Self {
            view: ViewState::new(texts),
            selection: SelectionController::default(),
            destination: DestinationController::default(),
            generation: GenerationController::default(),
            dispatcher: Dispatcher::new(bridge, completion_tx),
            completion_rx,
            view_tx,
        }
    }

    /// Current view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Respond to a user trigger. Never waits on the host.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    pub fn handle_trigger(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::PickSource => self.selection.trigger(&self.dispatcher),
            Trigger::PickDestination => self.destination.trigger(&self.dispatcher),
            Trigger::Generate => {
                let update = self.generation.trigger(&self.dispatcher, &mut self.view);
                self.publish(update);
            }
        }
    }

    /// Apply a bridge completion, discarding it if its request is stale.
    pub fn handle_completion(&mut self, completion: Completion) {
        let updates = match completion {
            Completion::ImagePicked { tag, result } => {
                self.selection
                    .on_image_picked(tag, result, &self.dispatcher, &mut self.view)
            }
            Completion::PreviewLoaded { tag, path, result } => {
                self.selection
                    .on_preview_loaded(tag, path, result, &mut self.view)
            }
            Completion::DirectoryPicked { tag, result } => {
                self.destination
                    .on_directory_picked(tag, result, &mut self.view)
            }
            Completion::GenerationFinished {
                tag,
                target_dir,
                result,
            } => self
                .generation
                .on_finished(tag, target_dir, result, &mut self.view)
                .into_iter()
                .collect(),
        };

        for update in updates {
            self.publish(update);
        }
    }

    /// Wait for the next bridge completion and apply it.
    ///
    /// For hosts that drive the orchestrator from their own loop instead of
    /// [`run`](Self::run).
    pub async fn process_next_completion(&mut self) -> bool {
        match self.completion_rx.recv().await {
            Some(completion) => {
                self.handle_completion(completion);
                true
            }
            None => false,
        }
    }

    /// Service triggers and completions until shutdown or until the
    /// trigger channel closes. Returns the final view state.
    #[instrument(skip_all)]
    pub async fn run(
        mut self,
        mut trigger_rx: mpsc::Receiver<Trigger>,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> ViewState {
        info!("Orchestrator started");

        loop {
            let event = tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Orchestrator shutting down");
                    break;
                }
                trigger = trigger_rx.recv() => match trigger {
                    Some(trigger) => LoopEvent::Trigger(trigger),
                    None => {
                        info!("Trigger channel closed, shutting down");
                        break;
                    }
                },
                Some(completion) = self.completion_rx.recv() => LoopEvent::Completion(completion),
            };

            match event {
                LoopEvent::Trigger(trigger) => self.handle_trigger(trigger),
                LoopEvent::Completion(completion) => self.handle_completion(completion),
            }
        }

        self.view
    }

    fn publish(&self, update: ViewUpdate) {
        if self.view_tx.send(update).is_err() {
            debug!("View closed, dropping update");
        }
    }
}
