//! Icon set generation and its status lifecycle.
//!
//! `Idle -> Pending -> {Done, Failed}`, re-entrant: every trigger restarts
//! at `Pending` (or fails locally) and supersedes any request still in
//! flight. Only the newest request may move the status out of `Pending`.

use crate::{
    CoreResult,
    controller::Dispatcher,
    state::{Phase, RequestCounter, RequestTag, ViewState, ViewUpdate},
};

use tracing::{debug, info, instrument, warn};

/// Reason shown when generation is triggered without a source image.
pub const MISSING_SOURCE_REASON: &str = "no source image selected";
/// Reason shown when generation is triggered without a destination.
pub const MISSING_TARGET_REASON: &str = "no destination directory selected";

/// Forwards the displayed paths to the host and tracks the status.
#[derive(Debug, Default)]
pub struct GenerationController {
    requests: RequestCounter,
}

impl GenerationController {
    /// Start a generation from the paths displayed right now.
    ///
    /// Empty paths fail locally without contacting the host. Otherwise the
    /// status is `Pending` before this returns.
    #[instrument(skip(self, dispatcher, view))]
    pub(crate) fn trigger(&mut self, dispatcher: &Dispatcher, view: &mut ViewState) -> ViewUpdate {
        let tag = self.requests.issue();
        let image_path = view.source_path().to_string();
        let target_dir = view.target_dir().to_string();

        let missing = if image_path.trim().is_empty() {
            Some(MISSING_SOURCE_REASON)
        } else if target_dir.trim().is_empty() {
            Some(MISSING_TARGET_REASON)
        } else {
            None
        };

        if let Some(reason) = missing {
            warn!(%tag, reason, "Generation rejected");
            return view.apply_phase(Phase::Failed {
                reason: reason.to_string(),
            });
        }

        let update = view.apply_phase(Phase::Pending);
        info!(
            %tag,
            image_path = %image_path,
            target_dir = %target_dir,
            "Generation started"
        );
        dispatcher.generate_icon_set(tag, image_path, target_dir);

        update
    }

    #[instrument(skip(self, result, view))]
    pub(crate) fn on_finished(
        &mut self,
        tag: RequestTag,
        target_dir: String,
        result: CoreResult<()>,
        view: &mut ViewState,
    ) -> Option<ViewUpdate> {
        if !self.requests.is_current(tag) {
            debug!(%tag, "Discarding superseded generation result");
            return None;
        }

        let phase = match result {
            Ok(()) => {
                info!(%tag, target_dir = %target_dir, "Generation complete");
                Phase::Done { target_dir }
            }
            Err(e) => {
                warn!(%tag, error = ?e, "Generation failed");
                Phase::Failed {
                    reason: e.user_message(),
                }
            }
        };

        Some(view.apply_phase(phase))
    }
}
