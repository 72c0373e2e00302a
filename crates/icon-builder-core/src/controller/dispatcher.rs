use crate::{bridge::HostBridge, controller::Completion, state::RequestTag};

use std::{future::Future, sync::Arc};

use tokio::sync::mpsc;
use tracing::debug;

/// Issues bridge calls as background tasks and reports their results.
///
/// The calling event loop never awaits the host directly; every result
/// comes back as a [`Completion`] on the channel.
#[derive(Clone)]
pub(crate) struct Dispatcher {
    bridge: Arc<dyn HostBridge>,
    completion_tx: mpsc::UnboundedSender<Completion>,
}

impl Dispatcher {
    pub(crate) fn new(
        bridge: Arc<dyn HostBridge>,
        completion_tx: mpsc::UnboundedSender<Completion>,
    ) -> Self {
        Self {
            bridge,
            completion_tx,
        }
    }

    pub(crate) fn select_image(&self, tag: RequestTag) {
        let bridge = Arc::clone(&self.bridge);
        self.spawn(async move {
            let result = bridge.select_image().await;
            Completion::ImagePicked { tag, result }
        });
    }

    pub(crate) fn get_preview(&self, tag: RequestTag, path: String) {
        let bridge = Arc::clone(&self.bridge);
        self.spawn(async move {
            let result = bridge.get_preview(&path).await;
            Completion::PreviewLoaded { tag, path, result }
        });
    }

    pub(crate) fn select_directory(&self, tag: RequestTag) {
        let bridge = Arc::clone(&self.bridge);
        self.spawn(async move {
            let result = bridge.select_directory().await;
            Completion::DirectoryPicked { tag, result }
        });
    }

    pub(crate) fn generate_icon_set(&self, tag: RequestTag, image_path: String, target_dir: String) {
        let bridge = Arc::clone(&self.bridge);
        self.spawn(async move {
            let result = bridge.generate_icon_set(&image_path, &target_dir).await;
            Completion::GenerationFinished {
                tag,
                target_dir,
                result,
            }
        });
    }

    fn spawn<F>(&self, call: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        let completion_tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let completion = call.await;
            if completion_tx.send(completion).is_err() {
                debug!("Event loop gone, dropping bridge completion");
            }
        });
    }
}
