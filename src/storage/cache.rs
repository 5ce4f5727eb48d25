//! On-disk cache for the update check.
//!
//! - Atomic writes using temp file + rename (prevents corruption)
//! - Graceful degradation on missing/corrupt cache

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How long a cached version lookup stays valid.
pub const UPDATE_CHECK_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Result of the last version lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCache {
    /// Unix seconds of the last lookup.
    #[serde(default)]
    pub last_check: i64,
    /// Newest published version, if the lookup succeeded.
    #[serde(default)]
    pub latest_version: Option<String>,
}

impl UpdateCache {
    /// Whether a new lookup is needed at `now` (unix seconds).
    #[must_use]
    pub fn is_due(&self, now: i64) -> bool {
        let interval = i64::try_from(UPDATE_CHECK_INTERVAL.as_secs()).unwrap_or(i64::MAX);
        now.saturating_sub(self.last_check) >= interval
    }
}

/// Read the cache. Missing or corrupt files read as an empty cache.
#[must_use]
pub fn read(path: &Path) -> UpdateCache {
    let Ok(content) = std::fs::read_to_string(path) else {
        return UpdateCache::default();
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::debug!(?path, error = %e, "Ignoring corrupt update cache");
        UpdateCache::default()
    })
}

/// Write the cache atomically, creating the parent directory.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn write(path: &Path, data: &UpdateCache) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string(data)?;
    write_atomic(path, content.as_bytes())?;
    Ok(())
}

/// Write bytes atomically using temp file + rename.
fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    // Same directory, so the rename stays on one filesystem.
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let temp_path = parent.join(format!(
        ".{}.tmp.{}",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("cache"),
        std::process::id()
    ));

    {
        let mut file = std::fs::File::create(&temp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    std::fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nanobanana").join("update_check.json");
        let cache = UpdateCache {
            last_check: 1_700_000_000,
            latest_version: Some("0.3.1".to_string()),
        };

        write(&path, &cache).unwrap();
        assert_eq!(read(&path), cache);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"last_check\":1700000000"));
    }

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read(&dir.path().join("nope.json")), UpdateCache::default());
    }

    #[test]
    fn corrupt_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("update_check.json");
        std::fs::write(&path, "{ broken").unwrap();
        assert_eq!(read(&path), UpdateCache::default());
    }

    #[test]
    fn null_version_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("update_check.json");
        std::fs::write(&path, r#"{"last_check": 5, "latest_version": null}"#).unwrap();
        let cache = read(&path);
        assert_eq!(cache.last_check, 5);
        assert!(cache.latest_version.is_none());
    }

    #[test]
    fn due_after_interval() {
        let cache = UpdateCache {
            last_check: 1_000,
            latest_version: None,
        };
        assert!(!cache.is_due(1_000 + 60));
        assert!(cache.is_due(1_000 + 86_400));
        assert!(UpdateCache::default().is_due(1_000_000));
    }
}
