use std::{fmt, io::Cursor};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageFormat, ImageReader};

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// What the console can say about a base64 preview payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSummary {
    /// No preview available.
    Empty,
    /// A PNG of the given size.
    Image {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// Encoded PNG size.
        bytes: usize,
    },
    /// The payload is not a base64 PNG.
    Undecodable {
        /// Why decoding failed.
        reason: String,
    },
}

impl PreviewSummary {
    /// Inspect a base64 PNG payload, with or without a `data:` URL prefix.
    ///
    /// Only the PNG header is read; the pixels are never decoded.
    pub fn from_base64(payload: &str) -> Self {
        let payload = payload.trim();
        let payload = payload.strip_prefix(DATA_URL_PREFIX).unwrap_or(payload);
        if payload.is_empty() {
            return PreviewSummary::Empty;
        }

        let bytes = match STANDARD.decode(payload) {
            Ok(bytes) => bytes,
            Err(e) => {
                return PreviewSummary::Undecodable {
                    reason: format!("invalid base64: {}", e),
                };
            }
        };

        match ImageReader::with_format(Cursor::new(&bytes), ImageFormat::Png).into_dimensions() {
            Ok((width, height)) => PreviewSummary::Image {
                width,
                height,
                bytes: bytes.len(),
            },
            Err(e) => PreviewSummary::Undecodable {
                reason: format!("not a PNG image: {}", e),
            },
        }
    }
}

impl fmt::Display for PreviewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewSummary::Empty => write!(f, "(none)"),
            PreviewSummary::Image {
                width,
                height,
                bytes,
            } => write!(f, "{}x{} PNG, {} bytes", width, height, bytes),
            PreviewSummary::Undecodable { reason } => write!(f, "unavailable ({})", reason),
        }
    }
}
