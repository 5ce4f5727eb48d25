//! Best-effort check for a newer release on crates.io.
//!
//! The lookup result is cached for 24 hours next to the config file. Nothing
//! here ever fails the caller: every error is logged at debug level and
//! swallowed.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::core::cli_runner::run_command;
use crate::core::http::{UPDATE_CHECK_TIMEOUT, build_client, fetch_json};
use crate::error::{Error, Result};
use crate::storage::cache::{self, UpdateCache};
use crate::util::env::is_env_truthy;

/// crates.io API host.
pub const CRATES_IO_BASE_URL: &str = "https://crates.io";

/// Set to a truthy value to skip the check.
pub const NO_UPDATE_CHECK_ENV: &str = "NANOBANANA_NO_UPDATE_CHECK";

const CRATE_NAME: &str = "nanobanana";
const UPGRADE_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    max_version: String,
}

/// What to tell the user after a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateNotice {
    Available { current: String, latest: String },
    Updated { latest: String },
    UpdateFailed,
}

impl fmt::Display for UpdateNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available { current, latest } => write!(
                f,
                "Update available: {current} -> {latest}\nRun: cargo install {CRATE_NAME}"
            ),
            Self::Updated { latest } => {
                write!(f, "Updated to {latest}. Restart to use the new version.")
            }
            Self::UpdateFailed => write!(
                f,
                "Auto-update failed. Run manually:\n  cargo install {CRATE_NAME}"
            ),
        }
    }
}

/// Whether the check is disabled through the environment.
#[must_use]
pub fn is_disabled() -> bool {
    is_env_truthy(NO_UPDATE_CHECK_ENV)
}

/// Compare dotted versions numerically. A pre-release or build suffix is
/// ignored; missing components count as zero.
#[must_use]
pub fn is_newer(latest: &str, current: &str) -> bool {
    fn components(version: &str) -> Vec<u64> {
        let core = version
            .trim()
            .trim_start_matches('v')
            .split(['-', '+'])
            .next()
            .unwrap_or_default();
        core.split('.')
            .map(|part| {
                let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
                digits.parse().unwrap_or(0)
            })
            .collect()
    }

    let latest = components(latest);
    let current = components(current);
    let len = latest.len().max(current.len());
    for i in 0..len {
        let a = latest.get(i).copied().unwrap_or(0);
        let b = current.get(i).copied().unwrap_or(0);
        if a != b {
            return a > b;
        }
    }
    false
}

/// Query crates.io for the newest published version.
///
/// # Errors
///
/// Returns error on network or parse failure.
pub async fn fetch_latest_version(base_url: &str) -> Result<String> {
    let client = build_client(UPDATE_CHECK_TIMEOUT)?;
    let url = format!(
        "{}/api/v1/crates/{CRATE_NAME}",
        base_url.trim_end_matches('/')
    );
    let response: CrateResponse = fetch_json(&client, &url, UPDATE_CHECK_TIMEOUT).await?;
    Ok(response.krate.max_version)
}

/// Latest version, served from the cache while it is fresh.
///
/// A stale or missing cache triggers a lookup; the result (even a failed
/// one) is written back so the next lookup waits a full interval.
pub async fn latest_version(cache_path: &Path, base_url: &str, now: i64) -> Option<String> {
    let cached = cache::read(cache_path);
    if !cached.is_due(now) {
        tracing::debug!(latest = ?cached.latest_version, "Using cached version lookup");
        return cached.latest_version;
    }

    let latest = match fetch_latest_version(base_url).await {
        Ok(version) => Some(version),
        Err(e) => {
            tracing::debug!(error = %e, "Version lookup failed");
            None
        }
    };

    let entry = UpdateCache {
        last_check: now,
        latest_version: latest.clone(),
    };
    if let Err(e) = cache::write(cache_path, &entry) {
        tracing::debug!(error = %e, "Could not write update cache");
    }

    latest
}

/// Decide whether to announce `latest`.
#[must_use]
pub fn notice_for(current: &str, latest: Option<&str>) -> Option<UpdateNotice> {
    let latest = latest?;
    is_newer(latest, current).then(|| UpdateNotice::Available {
        current: current.to_string(),
        latest: latest.to_string(),
    })
}

/// Run `cargo install nanobanana`.
async fn run_upgrade() -> Result<()> {
    let cargo = which::which("cargo").map_err(|e| Error::Other(e.into()))?;
    let cargo = cargo.to_string_lossy();
    let output = run_command(&cargo, &["install", CRATE_NAME], UPGRADE_TIMEOUT).await?;
    if output.success() {
        Ok(())
    } else {
        Err(Error::Other(anyhow::anyhow!(
            "cargo install exited with {}: {}",
            output.exit_code,
            output.stderr.trim()
        )))
    }
}

/// Full check: honour the opt-out, consult the cache, and upgrade when
/// `auto_update` is set.
pub async fn check_for_update(
    cache_path: &Path,
    current: &str,
    auto_update: bool,
) -> Option<UpdateNotice> {
    if is_disabled() {
        tracing::debug!("Update check disabled");
        return None;
    }

    let now = chrono::Utc::now().timestamp();
    let latest = latest_version(cache_path, CRATES_IO_BASE_URL, now).await;
    let notice = notice_for(current, latest.as_deref())?;

    if !auto_update {
        return Some(notice);
    }

    let UpdateNotice::Available { current, latest } = notice else {
        return Some(notice);
    };
    eprintln!("Updating {CRATE_NAME}: {current} -> {latest}...");
    match run_upgrade().await {
        Ok(()) => Some(UpdateNotice::Updated { latest }),
        Err(e) => {
            tracing::debug!(error = %e, "Auto-update failed");
            Some(UpdateNotice::UpdateFailed)
        }
    }
}
