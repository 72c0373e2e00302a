/// Generation lifecycle shown in the status area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    /// No generation has been requested yet.
    #[default]
    Idle,
    /// A generation request is in flight.
    Pending,
    /// The most recent generation finished successfully.
    Done {
        /// Directory the icon set was written to.
        target_dir: String,
    },
    /// The most recent generation failed or was rejected locally.
    Failed {
        /// Human-readable failure reason.
        reason: String,
    },
}

impl Phase {
    /// Render the status message for this phase.
    ///
    /// The failed message always contains the failure reason.
    pub fn message(&self, texts: &StatusTexts) -> String {
        match self {
            Phase::Idle => texts.idle.clone(),
            Phase::Pending => texts.pending.clone(),
            Phase::Done { .. } => texts.done.clone(),
            Phase::Failed { reason } => format!("{}: {}", texts.failed_prefix, reason),
        }
    }

    /// Whether a generation request is currently in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }
}

/// Status texts displayed for each [`Phase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTexts {
    /// Text shown before any generation.
    pub idle: String,
    /// Text shown while generation is in flight.
    pub pending: String,
    /// Text shown after a successful generation.
    pub done: String,
    /// Prefix placed before the reason of a failure.
    pub failed_prefix: String,
}

impl Default for StatusTexts {
    fn default() -> Self {
        Self {
            idle: String::new(),
            pending: "Generating icon set, this takes a few seconds...".to_string(),
            done: "Done".to_string(),
            failed_prefix: "Failed".to_string(),
        }
    }
}
