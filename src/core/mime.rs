//! MIME type and file extension mapping.

use std::path::Path;

/// Fallback for unknown types in both directions.
pub const DEFAULT_MIME: &str = "image/png";

/// File extension (including the dot) for a MIME type returned by a backend.
///
/// Unknown types map to `.png`.
#[must_use]
pub fn extension_from_mime(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => ".jpg",
        "image/webp" => ".webp",
        _ => ".png",
    }
}

/// MIME type for an input image, judged by its extension.
#[must_use]
pub fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => DEFAULT_MIME,
    }
}
