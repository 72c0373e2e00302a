use crate::config::default_open_output_on_done;

use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Open the output directory in the system file browser after a
    /// successful generation.
    #[serde(default = "default_open_output_on_done")]
    pub open_output_on_done: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            open_output_on_done: default_open_output_on_done(),
        }
    }
}
