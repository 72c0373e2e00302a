use crate::{BridgeError, CoreResult};

use serde_json::{Value, json};

/// A command understood by the host process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCommand {
    /// Open the host's image picker.
    SelectImage,
    /// Render a preview of an image as base64 PNG.
    GetPreview {
        /// Image to render.
        image_path: String,
    },
    /// Open the host's directory picker.
    SelectDirectory,
    /// Generate the icon set for an image into a directory.
    GenerateIconSet {
        /// Source image.
        image_path: String,
        /// Output directory.
        target_dir: String,
    },
}

impl BridgeCommand {
    /// Wire name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            BridgeCommand::SelectImage => "select_image",
            BridgeCommand::GetPreview { .. } => "get_preview",
            BridgeCommand::SelectDirectory => "select_directory",
            BridgeCommand::GenerateIconSet { .. } => "generate_icon_set",
        }
    }

    /// Wire arguments of the command, with camelCase keys.
    pub fn args(&self) -> Value {
        match self {
            BridgeCommand::SelectImage | BridgeCommand::SelectDirectory => json!({}),
            BridgeCommand::GetPreview { image_path } => json!({ "imagePath": image_path }),
            BridgeCommand::GenerateIconSet {
                image_path,
                target_dir,
            } => json!({ "imagePath": image_path, "targetDir": target_dir }),
        }
    }
}

/// Decode a picker reply. Null, absent and blank paths mean cancellation.
#[track_caller]
pub(crate) fn decode_picked_path(value: Value) -> CoreResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(path) if path.trim().is_empty() => Ok(None),
        Value::String(path) => Ok(Some(path)),
        other => Err(BridgeError::protocol(format!(
            "expected a path or null, got {}",
            other
        ))),
    }
}

/// Decode a preview reply into its base64 payload.
#[track_caller]
pub(crate) fn decode_preview(value: Value) -> CoreResult<String> {
    match value {
        Value::String(payload) => Ok(payload),
        other => Err(BridgeError::protocol(format!(
            "expected a base64 preview, got {}",
            other
        ))),
    }
}
