//! Source image selection: pick a path, then fetch its preview.

use crate::{
    CoreResult,
    controller::{Dispatcher, report_failure},
    state::{RequestCounter, RequestTag, ViewState, ViewUpdate},
};

use tracing::{debug, info, instrument, warn};

/// Picks a source image and its preview.
///
/// The path and preview are published together once both calls resolve.
/// Results belonging to a superseded trigger are discarded, so a slow
/// preview can never overwrite the preview of a later pick.
#[derive(Debug, Default)]
pub struct SelectionController {
    requests: RequestCounter,
}

impl SelectionController {
    #[instrument(skip(self, dispatcher))]
    pub(crate) fn trigger(&mut self, dispatcher: &Dispatcher) {
        let tag = self.requests.issue();
        dispatcher.select_image(tag);
        info!(%tag, "Source selection requested");
    }

    #[instrument(skip(self, result, dispatcher, view))]
    pub(crate) fn on_image_picked(
        &mut self,
        tag: RequestTag,
        result: CoreResult<Option<String>>,
        dispatcher: &Dispatcher,
        view: &mut ViewState,
    ) -> Vec<ViewUpdate> {
        if !self.requests.is_current(tag) {
            debug!(%tag, "Discarding stale image pick");
            return Vec::new();
        }

        match result {
            Ok(Some(path)) => {
                debug!(%tag, path = %path, "Image picked, fetching preview");
                dispatcher.get_preview(tag, path);
                Vec::new()
            }
            Ok(None) => {
                info!(%tag, "Source selection cancelled");
                Vec::new()
            }
            Err(e) => {
                warn!(%tag, error = ?e, "Image picker failed");
                vec![report_failure(
                    view,
                    format!("could not pick image: {}", e.user_message()),
                )]
            }
        }
    }

    #[instrument(skip(self, result, view))]
    pub(crate) fn on_preview_loaded(
        &mut self,
        tag: RequestTag,
        path: String,
        result: CoreResult<String>,
        view: &mut ViewState,
    ) -> Vec<ViewUpdate> {
        if !self.requests.is_current(tag) {
            debug!(%tag, path = %path, "Discarding stale preview");
            return Vec::new();
        }

        match result {
            Ok(preview) => {
                info!(%tag, path = %path, preview_len = preview.len(), "Source selected");
                vec![view.apply_selection(path, preview)]
            }
            Err(e) => {
                // The new path is still applied, with no preview, so the old
                // preview never shows against it.
                warn!(%tag, path = %path, error = ?e, "Preview failed");
                let reason = format!("could not preview {}: {}", path, e.user_message());
                let selected = view.apply_selection(path, String::new());
                vec![selected, report_failure(view, reason)]
            }
        }
    }
}
