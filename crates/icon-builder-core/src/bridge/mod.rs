//! Asynchronous command bridge to the out-of-process host.

mod command;
mod json_line;

pub(crate) use command::{decode_picked_path, decode_preview};

pub use {command::BridgeCommand, json_line::JsonLineBridge};

use crate::CoreResult;

use async_trait::async_trait;

/// The host process as seen by the controllers.
///
/// Every method is a suspension point. Implementations must not block the
/// calling task while the host works, and must report picker cancellation
/// as `Ok(None)` rather than an error.
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Ask the host to let the user pick a source image.
    async fn select_image(&self) -> CoreResult<Option<String>>;

    /// Fetch a base64 PNG preview of `image_path`.
    async fn get_preview(&self, image_path: &str) -> CoreResult<String>;

    /// Ask the host to let the user pick a destination directory.
    async fn select_directory(&self) -> CoreResult<Option<String>>;

    /// Generate the icon set for `image_path` into `target_dir`.
    async fn generate_icon_set(&self, image_path: &str, target_dir: &str) -> CoreResult<()>;
}
