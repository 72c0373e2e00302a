use crate::state::{Phase, StatusTexts, ViewUpdate};

/// Transient UI state owned by the orchestrator.
///
/// Fields are private; each field group changes through exactly one
/// `apply_*` function, which returns the [`ViewUpdate`] to publish. The
/// source path and preview can only change together.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    source_path: String,
    preview: String,
    target_dir: String,
    phase: Phase,
    texts: StatusTexts,
}

impl ViewState {
    /// Create an empty view rendering statuses with `texts`.
    pub fn new(texts: StatusTexts) -> Self {
        Self {
            texts,
            ..Self::default()
        }
    }

    /// Currently displayed source image path.
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// Base64 preview payload for [`source_path`](Self::source_path).
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Currently displayed destination directory.
    pub fn target_dir(&self) -> &str {
        &self.target_dir
    }

    /// Current generation phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Status message rendered from the current phase.
    pub fn status_message(&self) -> String {
        self.phase.message(&self.texts)
    }

    /// Replace the source path and its preview in one step.
    pub fn apply_selection(&mut self, path: String, preview: String) -> ViewUpdate {
        self.source_path = path;
        self.preview = preview;
        ViewUpdate::SourceSelected {
            path: self.source_path.clone(),
            preview: self.preview.clone(),
        }
    }

    /// Replace the destination directory.
    pub fn apply_target_dir(&mut self, path: String) -> ViewUpdate {
        self.target_dir = path;
        ViewUpdate::TargetDirSelected {
            path: self.target_dir.clone(),
        }
    }

    /// Move the status to `phase`.
    pub fn apply_phase(&mut self, phase: Phase) -> ViewUpdate {
        self.phase = phase;
        ViewUpdate::Status {
            phase: self.phase.clone(),
            message: self.phase.message(&self.texts),
        }
    }

    /// Report a failure without changing the phase.
    pub fn notice_failure(&self, reason: &str) -> ViewUpdate {
        ViewUpdate::Notice {
            message: Phase::Failed {
                reason: reason.to_string(),
            }
            .message(&self.texts),
        }
    }
}
