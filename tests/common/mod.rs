//! Shared helpers for integration tests.
//!
//! - `log_capture`: collect tracing events emitted during a test
//! - [`nanobanana_cmd`]: the binary with an isolated environment

#![allow(dead_code)]

pub mod log_capture;

use std::path::Path;

use assert_cmd::Command;

/// The `nanobanana` binary with no API keys, no update check and
/// `XDG_CONFIG_HOME` pointed at `config_home`.
#[allow(deprecated)]
pub fn nanobanana_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nanobanana").expect("binary builds");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("NANOBANANA_NO_UPDATE_CHECK", "1")
        .env_remove("GEMINI_API_KEY")
        .env_remove("OPENROUTER_API_KEY")
        .env_remove("NANOBANANA_LOG")
        .env_remove("NANOBANANA_LOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}
