use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Host bridge errors with source location tracking.
///
/// Picker cancellation is never represented here; it is a successful
/// `None` result.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The host process reported a failure for a command.
    #[error("Host command {command} failed: {reason} {location}")]
    HostFailed {
        /// Wire name of the failing command.
        command: &'static str,
        /// Failure text reported by the host.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The host process closed its output before answering.
    #[error("Host process exited {location}")]
    HostExited {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A message from the host could not be understood.
    #[error("Bridge protocol error: {reason} {location}")]
    Protocol {
        /// Description of the protocol violation.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Writing to the host failed.
    #[error("Bridge IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The host executable could not be started.
    #[error("Failed to start host {program:?}: {source} {location}")]
    Spawn {
        /// Host program that failed to start.
        program: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl BridgeError {
    /// Short human-readable reason, without call-site details.
    ///
    /// This is the text shown to the user in the status area.
    pub fn user_message(&self) -> String {
        match self {
            BridgeError::HostFailed { reason, .. } => reason.clone(),
            BridgeError::HostExited { .. } => "host process exited".to_string(),
            BridgeError::Protocol { reason, .. } => format!("unexpected host reply: {}", reason),
            BridgeError::Io { source, .. } => format!("cannot reach host: {}", source),
            BridgeError::Spawn { source, .. } => format!("cannot start host: {}", source),
        }
    }

    #[track_caller]
    pub(crate) fn host_exited() -> Self {
        BridgeError::HostExited {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn protocol(reason: impl Into<String>) -> Self {
        BridgeError::Protocol {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for BridgeError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        BridgeError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`BridgeError`].
pub type Result<T> = std::result::Result<T, BridgeError>;
