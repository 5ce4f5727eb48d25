//! Output file naming and writing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use super::mime::extension_from_mime;
use crate::error::{Error, Result};

/// Final output location for a generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPath {
    pub path: PathBuf,
    /// The user's extension was replaced to match the returned format.
    pub adjusted: bool,
}

/// Derive the output path from the returned MIME type.
///
/// Without a user path a timestamped `image_YYYYMMDD_HHMMSS.<ext>` name is
/// used. A user path with a mismatching extension keeps its stem and gets the
/// MIME extension instead.
#[must_use]
pub fn resolve_output_path<Tz: TimeZone>(
    mime_type: &str,
    requested: Option<&Path>,
    now: &DateTime<Tz>,
) -> OutputPath
where
    Tz::Offset: std::fmt::Display,
{
    let ext = extension_from_mime(mime_type);

    let Some(requested) = requested else {
        let name = format!("image_{}{ext}", now.format("%Y%m%d_%H%M%S"));
        return OutputPath {
            path: PathBuf::from(name),
            adjusted: false,
        };
    };

    let current = requested
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default();

    if current == ext {
        OutputPath {
            path: requested.to_path_buf(),
            adjusted: false,
        }
    } else {
        OutputPath {
            path: requested.with_extension(ext.trim_start_matches('.')),
            adjusted: true,
        }
    }
}

/// Write image bytes to `path`.
///
/// # Errors
///
/// Returns [`Error::WriteOutput`] if the file cannot be written.
pub fn write_image(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(Error::WriteOutput)?;
    tracing::debug!(?path, bytes = data.len(), "Image written");
    Ok(())
}
