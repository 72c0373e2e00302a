use crate::state::Phase;

/// A single visible change, pushed from the orchestrator to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Source path and preview changed together.
    SourceSelected {
        /// New source image path.
        path: String,
        /// Base64 preview payload for `path`; empty if no preview is available.
        preview: String,
    },
    /// Destination directory changed.
    TargetDirSelected {
        /// New destination directory.
        path: String,
    },
    /// Generation status changed.
    Status {
        /// New phase.
        phase: Phase,
        /// Rendered status message for `phase`.
        message: String,
    },
    /// A failure reported while the status is owned by a running
    /// generation. The phase is unchanged.
    Notice {
        /// Rendered failure message.
        message: String,
    },
}
