use crate::config::{default_log_file_name, default_log_filter};

use serde::{Deserialize, Serialize};

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Log file name inside the application data directory.
    #[serde(default = "default_log_file_name")]
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file_name: default_log_file_name(),
        }
    }
}
