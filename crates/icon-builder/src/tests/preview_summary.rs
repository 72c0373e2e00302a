use crate::PreviewSummary;

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageFormat, RgbaImage};

#[allow(clippy::unwrap_used)]
fn png_base64(width: u32, height: u32) -> (String, usize) {
    let mut bytes = Vec::new();
    RgbaImage::new(width, height)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    (STANDARD.encode(&bytes), bytes.len())
}

/// WHAT: A base64 PNG is summarised by its dimensions and size
/// WHY: The console cannot draw the preview, so it describes it
#[test]
fn given_png_payload_when_summarising_then_dimensions_reported() {
    // Given: A 3x2 PNG encoded as base64
    let (payload, len) = png_base64(3, 2);

    // When: Summarising
    let summary = PreviewSummary::from_base64(&payload);

    // Then: Width, height and byte count are extracted
    assert_eq!(
        summary,
        PreviewSummary::Image {
            width: 3,
            height: 2,
            bytes: len,
        }
    );
    assert_eq!(summary.to_string(), format!("3x2 PNG, {} bytes", len));
}

/// WHAT: A data URL prefix is accepted
/// WHY: Hosts may send the preview ready for an img tag
#[test]
fn given_data_url_payload_when_summarising_then_prefix_ignored() {
    // Given: A PNG payload with a data URL prefix
    let (payload, _) = png_base64(4, 4);
    let payload = format!("data:image/png;base64,{}", payload);

    // When: Summarising
    let summary = PreviewSummary::from_base64(&payload);

    // Then: The image is still recognised
    assert!(matches!(
        summary,
        PreviewSummary::Image {
            width: 4,
            height: 4,
            ..
        }
    ));
}

/// WHAT: An empty payload means no preview
/// WHY: A failed preview load leaves the preview empty
#[test]
fn given_empty_payload_when_summarising_then_empty() {
    // Given/When: An empty payload
    let summary = PreviewSummary::from_base64("");

    // Then: Empty, shown as "(none)"
    assert_eq!(summary, PreviewSummary::Empty);
    assert_eq!(summary.to_string(), "(none)");
}

/// WHAT: Bad payloads are reported, not fatal
/// WHY: A misbehaving host must not crash the console
#[test]
fn given_invalid_payloads_when_summarising_then_undecodable() {
    // Given: Text that is not base64, and base64 that is not a PNG
    let not_base64 = "***";
    let not_png = STANDARD.encode(b"GIF89a not really");

    // When: Summarising both
    let first = PreviewSummary::from_base64(not_base64);
    let second = PreviewSummary::from_base64(&not_png);

    // Then: Both are undecodable
    assert!(matches!(first, PreviewSummary::Undecodable { .. }));
    assert!(matches!(second, PreviewSummary::Undecodable { .. }));
    assert!(second.to_string().starts_with("unavailable ("));
}
