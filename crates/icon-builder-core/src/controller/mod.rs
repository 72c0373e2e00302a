mod completion;
mod destination;
mod dispatcher;
mod generation;
mod selection;
mod trigger;

pub(crate) use dispatcher::Dispatcher;

pub use {
    completion::Completion,
    destination::DestinationController,
    generation::{GenerationController, MISSING_SOURCE_REASON, MISSING_TARGET_REASON},
    selection::SelectionController,
    trigger::Trigger,
};

use crate::state::{Phase, ViewState, ViewUpdate};

use tracing::warn;

/// Surface a picker or preview failure.
///
/// A generation in flight owns the status until it finishes, so the
/// failure is published as a notice instead.
pub(crate) fn report_failure(view: &mut ViewState, reason: String) -> ViewUpdate {
    if view.phase().is_pending() {
        warn!(reason = %reason, "Generation pending, failure shown as notice");
        return view.notice_failure(&reason);
    }
    view.apply_phase(Phase::Failed { reason })
}
