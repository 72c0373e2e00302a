use crate::{
    CoreResult,
    controller::{Dispatcher, report_failure},
    state::{RequestCounter, RequestTag, ViewState, ViewUpdate},
};

use tracing::{debug, info, instrument, warn};

/// Picks the destination directory.
#[derive(Debug, Default)]
pub struct DestinationController {
    requests: RequestCounter,
}

impl DestinationController {
    #[instrument(skip(self, dispatcher))]
    pub(crate) fn trigger(&mut self, dispatcher: &Dispatcher) {
        let tag = self.requests.issue();
        dispatcher.select_directory(tag);
        info!(%tag, "Destination selection requested");
    }

    #[instrument(skip(self, result, view))]
    pub(crate) fn on_directory_picked(
        &mut self,
        tag: RequestTag,
        result: CoreResult<Option<String>>,
        view: &mut ViewState,
    ) -> Vec<ViewUpdate> {
        if !self.requests.is_current(tag) {
            debug!(%tag, "Discarding stale directory pick");
            return Vec::new();
        }

        match result {
            Ok(Some(path)) => {
                info!(%tag, path = %path, "Destination selected");
                vec![view.apply_target_dir(path)]
            }
            Ok(None) => {
                info!(%tag, "Destination selection cancelled");
                Vec::new()
            }
            Err(e) => {
                warn!(%tag, error = ?e, "Directory picker failed");
                vec![report_failure(
                    view,
                    format!("could not pick directory: {}", e.user_message()),
                )]
            }
        }
    }
}
