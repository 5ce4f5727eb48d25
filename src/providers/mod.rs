//! Image generation backends.
//!
//! Each backend has its own submodule with a client that performs exactly
//! one request per generation.

pub mod gemini;
pub mod openrouter;

use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::core::mime::mime_from_extension;
use crate::error::{Error, Result};

/// An input image ready to be embedded in a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: &'static str,
    /// Standard base64, no line breaks.
    pub data: String,
}

impl EncodedImage {
    /// `data:<mime>;base64,<payload>`
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Read an input image and base64-encode it. The MIME type comes from the
/// file extension.
///
/// # Errors
///
/// Returns [`Error::ReadImage`] if the file cannot be read.
pub fn load_image(path: &Path) -> Result<EncodedImage> {
    let bytes = std::fs::read(path).map_err(|source| Error::ReadImage {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(?path, bytes = bytes.len(), "Loaded input image");

    Ok(EncodedImage {
        mime_type: mime_from_extension(path),
        data: BASE64.encode(bytes),
    })
}

/// Decode a base64 image payload.
pub(crate) fn decode_base64(payload: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(payload.trim())
        .map_err(|e| Error::DecodeImage(e.to_string()))
}
