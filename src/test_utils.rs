//! Test utilities for nanobanana.
//!
//! Provides temporary directories, config homes and canned backend
//! responses for use across unit and integration tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nanobanana::test_utils::*;
//!
//! let home = TestConfigHome::with_config(r#"{"api": "openrouter"}"#);
//! let body = gemini_image_response("image/png", TINY_PNG);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use crate::storage::AppPaths;

// =============================================================================
// Image Fixtures
// =============================================================================

/// PNG signature plus an empty IHDR chunk header. Enough to look like a PNG
/// to anything that checks magic bytes.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52,
];

/// JPEG SOI marker followed by an APP0 marker.
pub const TINY_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

/// Base64 text for `bytes`, as the backends send it.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

// =============================================================================
// Canned Backend Responses
// =============================================================================

/// A Gemini `generateContent` body carrying one text part and one image.
#[must_use]
pub fn gemini_image_response(mime_type: &str, bytes: &[u8]) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": "Here is your image." },
                    { "inlineData": { "mimeType": mime_type, "data": encode(bytes) } }
                ]
            }
        }]
    })
}

/// A Gemini body with an explicit error object.
#[must_use]
pub fn gemini_error_response(code: i64, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message, "status": "INVALID_ARGUMENT" } })
}

/// An OpenRouter chat completion carrying one image as a data URL.
#[must_use]
pub fn openrouter_image_response(mime_type: &str, bytes: &[u8]) -> Value {
    json!({
        "id": "gen-test",
        "choices": [{
            "message": {
                "role": "assistant",
                "content": "",
                "images": [{
                    "type": "image_url",
                    "image_url": { "url": format!("data:{mime_type};base64,{}", encode(bytes)) }
                }]
            }
        }]
    })
}

// =============================================================================
// Temporary Directories
// =============================================================================

/// An isolated temporary directory, removed on drop.
///
/// # Examples
///
/// ```rust,ignore
/// use nanobanana::test_utils::TestDir;
///
/// let dir = TestDir::new();
/// dir.create_file("input.png", TINY_PNG);
/// assert!(dir.file_path("input.png").exists());
/// ```
pub struct TestDir {
    inner: tempfile::TempDir,
}

impl TestDir {
    /// Create a new isolated temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: tempfile::tempdir().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the temporary directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Create a file with the given content, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn create_file(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.inner.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Get the full path to a file in the temporary directory.
    #[must_use]
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.inner.path().join(name)
    }

    /// Names of the entries directly inside the directory, sorted.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be listed.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.inner.path())
            .expect("Failed to list test directory")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// A temporary `XDG_CONFIG_HOME` with the nanobanana config layout.
pub struct TestConfigHome {
    dir: TestDir,
}

impl TestConfigHome {
    /// An empty config home (no config file).
    #[must_use]
    pub fn new() -> Self {
        Self { dir: TestDir::new() }
    }

    /// A config home whose `config.json` holds `content`.
    #[must_use]
    pub fn with_config(content: &str) -> Self {
        let home = Self::new();
        home.dir.create_file("nanobanana/config.json", content);
        home
    }

    /// Directory to export as `XDG_CONFIG_HOME`.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Paths rooted in this config home.
    ///
    /// # Panics
    ///
    /// Panics if the path is not valid UTF-8.
    #[must_use]
    pub fn app_paths(&self) -> AppPaths {
        let home = self.dir.path().to_str().expect("temp dir is UTF-8");
        AppPaths::from_parts(Some(home), None).expect("config home resolves")
    }
}

impl Default for TestConfigHome {
    fn default() -> Self {
        Self::new()
    }
}
