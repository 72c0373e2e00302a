use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Host process configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Host executable speaking the JSON-lines bridge protocol.
    pub program: PathBuf,

    /// Extra arguments passed to the host.
    #[serde(default)]
    pub args: Vec<String>,
}
