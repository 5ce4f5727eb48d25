//! Install the bundled agent skill.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::storage::paths::default_claude_dir;

/// Skill file shipped inside the binary.
pub const SKILL_MD: &str = include_str!("../../skill/nanobanana/SKILL.md");

/// Outcome of an install attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(PathBuf),
    /// The agent directory does not exist; nothing was written.
    MissingAgentDir(PathBuf),
}

/// Copy the skill into `<claude_dir>/skills/nanobanana/`, replacing any
/// previous copy.
///
/// # Errors
///
/// Returns error if the target directory cannot be written.
pub fn install_into(claude_dir: &Path) -> Result<InstallOutcome> {
    if !claude_dir.is_dir() {
        return Ok(InstallOutcome::MissingAgentDir(claude_dir.to_path_buf()));
    }

    let target = claude_dir.join("skills").join("nanobanana");
    if target.exists() {
        fs::remove_dir_all(&target)?;
    }
    fs::create_dir_all(&target)?;
    fs::write(target.join("SKILL.md"), SKILL_MD)?;

    tracing::debug!(?target, "Skill files written");
    Ok(InstallOutcome::Installed(target))
}

/// `install-skill [-claude-dir DIR]`.
///
/// # Errors
///
/// Returns error if no home directory is known or the copy fails.
pub fn run(claude_dir: Option<&Path>) -> Result<()> {
    let claude_dir = match claude_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_claude_dir()
            .ok_or_else(|| Error::Config("cannot determine home directory".to_string()))?,
    };

    match install_into(&claude_dir)? {
        InstallOutcome::Installed(target) => {
            println!("Skill installed to {}", target.display());
        }
        InstallOutcome::MissingAgentDir(dir) => {
            println!("Claude Code directory not found: {}", dir.display());
            println!("Install Claude Code first, then re-run this command.");
            println!("Or specify a custom path: nanobanana install-skill -claude-dir <path>");
        }
    }
    Ok(())
}
