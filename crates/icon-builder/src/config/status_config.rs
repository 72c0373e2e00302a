use icon_builder_core::StatusTexts;

use serde::{Deserialize, Serialize};

/// Status area wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Shown before any generation.
    pub idle: String,
    /// Shown while generation is running.
    pub pending: String,
    /// Shown after a successful generation.
    pub done: String,
    /// Placed before the reason of a failure.
    pub failed_prefix: String,
}

impl StatusConfig {
    /// Texts handed to the orchestrator.
    pub fn texts(&self) -> StatusTexts {
        StatusTexts {
            idle: self.idle.clone(),
            pending: self.pending.clone(),
            done: self.done.clone(),
            failed_prefix: self.failed_prefix.clone(),
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        let texts = StatusTexts::default();
        Self {
            idle: texts.idle,
            pending: texts.pending,
            done: texts.done,
            failed_prefix: texts.failed_prefix,
        }
    }
}
