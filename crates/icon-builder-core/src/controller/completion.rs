use crate::{CoreResult, state::RequestTag};

/// Result of a bridge call, tagged with the request that issued it.
#[derive(Debug)]
pub enum Completion {
    /// `select_image` resolved.
    ImagePicked {
        /// Selection request that issued the call.
        tag: RequestTag,
        /// Picked path, `None` on cancellation.
        result: CoreResult<Option<String>>,
    },
    /// `get_preview` resolved for `path`.
    PreviewLoaded {
        /// Selection request that issued the call.
        tag: RequestTag,
        /// Path the preview was requested for.
        path: String,
        /// Base64 preview payload.
        result: CoreResult<String>,
    },
    /// `select_directory` resolved.
    DirectoryPicked {
        /// Destination request that issued the call.
        tag: RequestTag,
        /// Picked directory, `None` on cancellation.
        result: CoreResult<Option<String>>,
    },
    /// `generate_icon_set` resolved.
    GenerationFinished {
        /// Generation request that issued the call.
        tag: RequestTag,
        /// Directory the request targeted.
        target_dir: String,
        /// Outcome reported by the host.
        result: CoreResult<()>,
    },
}
